use std::sync::Arc;

use jokebox::state::ValueHolder;
use parking_lot::Mutex;

#[test]
fn set_notifies_each_subscriber_once_in_registration_order() {
    let holder = ValueHolder::new(None::<String>);
    let view = holder.observe();
    let log = Arc::new(Mutex::new(Vec::new()));

    let first_log = Arc::clone(&log);
    let _first = view.subscribe(move |value: &Option<String>| {
        first_log.lock().push(("first", value.clone()));
    });
    let second_log = Arc::clone(&log);
    let _second = view.subscribe(move |value: &Option<String>| {
        second_log.lock().push(("second", value.clone()));
    });

    holder.set(Some("hello".to_string()));

    assert_eq!(
        *log.lock(),
        vec![
            ("first", Some("hello".to_string())),
            ("second", Some("hello".to_string())),
        ]
    );
    assert_eq!(view.get(), Some("hello".to_string()));
}

#[test]
fn subscribing_does_not_replay_current_value() {
    let holder = ValueHolder::new(5u32);
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let _sub = holder.observe().subscribe(move |_| *counter.lock() += 1);
    assert_eq!(*calls.lock(), 0);
}

#[test]
fn equal_values_still_notify() {
    let holder = ValueHolder::new(1u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = holder.observe().subscribe(move |v| sink.lock().push(*v));

    holder.set(1);
    holder.set(1);

    assert_eq!(*seen.lock(), vec![1, 1]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let holder = ValueHolder::new(0u32);
    let view = holder.observe();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = view.subscribe(move |v| sink.lock().push(*v));

    holder.set(1);
    sub.unsubscribe();
    holder.set(2);
    holder.set(3);

    assert_eq!(*seen.lock(), vec![1]);
    assert_eq!(view.subscriber_count(), 0);
    assert_eq!(view.get(), 3);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let holder = ValueHolder::new(0u32);
    let seen = Arc::new(Mutex::new(0));
    {
        let sink = Arc::clone(&seen);
        let _sub = holder.observe().subscribe(move |_| *sink.lock() += 1);
        holder.set(1);
    }
    holder.set(2);
    assert_eq!(*seen.lock(), 1);
}

#[test]
fn unsubscribing_one_keeps_the_others() {
    let holder = ValueHolder::new(0u32);
    let view = holder.observe();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let a_sink = Arc::clone(&seen);
    let a = view.subscribe(move |v| a_sink.lock().push(("a", *v)));
    let b_sink = Arc::clone(&seen);
    let _b = view.subscribe(move |v| b_sink.lock().push(("b", *v)));

    a.unsubscribe();
    holder.set(9);

    assert_eq!(*seen.lock(), vec![("b", 9)]);
}

#[test]
fn observer_may_unsubscribe_itself_during_notification() {
    let holder = ValueHolder::new(0u32);
    let slot: Arc<Mutex<Option<jokebox::state::Subscription>>> = Arc::new(Mutex::new(None));
    let seen = Arc::new(Mutex::new(0));

    let slot_in_observer = Arc::clone(&slot);
    let sink = Arc::clone(&seen);
    let sub = holder.observe().subscribe(move |_| {
        *sink.lock() += 1;
        if let Some(sub) = slot_in_observer.lock().take() {
            sub.unsubscribe();
        }
    });
    *slot.lock() = Some(sub);

    holder.set(1);
    holder.set(2);

    assert_eq!(*seen.lock(), 1);
}

#[test]
fn concurrent_updates_are_not_lost() {
    let holder = ValueHolder::new(0u64);
    let threads: Vec<_> = (0..8)
        .map(|_| {
            let holder = holder.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    holder.update(|n| *n += 1);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    assert_eq!(holder.get(), 8000);
}

#[test]
fn write_from_observer_leaves_every_subscriber_on_latest_value() {
    let holder = ValueHolder::new(0u32);
    let view = holder.observe();
    let writer = holder.clone();
    let first_seen = Arc::new(Mutex::new(None));
    let first_sink = Arc::clone(&first_seen);
    let _first = view.subscribe(move |value: &u32| {
        *first_sink.lock() = Some(*value);
        if *value == 1 {
            writer.set(2);
        }
    });
    let last_seen = Arc::new(Mutex::new(Vec::new()));
    let last_sink = Arc::clone(&last_seen);
    let _last = view.subscribe(move |value: &u32| last_sink.lock().push(*value));

    holder.set(1);

    assert_eq!(holder.get(), 2);
    assert_eq!(*first_seen.lock(), Some(holder.get()));
    assert_eq!(last_seen.lock().last().copied(), Some(holder.get()));
    assert_eq!(*last_seen.lock(), vec![2]);
}
