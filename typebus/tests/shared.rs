//! SharedDispatcher: the same semantics behind a cloneable, locked handle.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::thread;
use typebus::{DispatchError, DynHandler, Shape, SharedDispatcher};

mod common;
use common::{CounterMessage, CountingHandler, HandlerFailure, StrayMessage, TextMessage};

#[test]
fn clones_share_one_registry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let bus = SharedDispatcher::new();
    let publisher = bus.clone();

    bus.subscribe(CountingHandler {
        calls: calls.clone(),
    });

    publisher.publish(CounterMessage { value: 1 }).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(publisher.is_bound(Shape::of::<CounterMessage>()));
}

#[test]
fn publishes_from_multiple_threads_reach_the_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let bus = SharedDispatcher::new();
    bus.subscribe(CountingHandler {
        calls: calls.clone(),
    });

    let workers: Vec<_> = (0..4)
        .map(|value| {
            let bus = bus.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    bus.publish(CounterMessage { value }).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 100);
}

#[test]
fn overwrite_is_visible_to_all_clones() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let bus = SharedDispatcher::new();
    let publisher = bus.clone();

    bus.subscribe(CountingHandler {
        calls: first.clone(),
    });
    bus.subscribe(CountingHandler {
        calls: second.clone(),
    });

    publisher.publish(CounterMessage { value: 9 }).unwrap();
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn unhandled_and_contract_paths_match_the_plain_dispatcher() {
    let bus = SharedDispatcher::new();

    assert!(matches!(
        bus.publish(StrayMessage { id: 7 }),
        Err(DispatchError::Unhandled(_))
    ));

    let err = bus
        .subscribe_dyn(
            Shape::of::<TextMessage>(),
            DynHandler::without_result(|_: TextMessage| {}),
        )
        .unwrap_err();
    assert!(err.to_string().contains("TextMessage"));
    assert!(!bus.is_bound(Shape::of::<TextMessage>()));
}

#[test]
fn publish_any_works_through_the_shared_handle() {
    let calls = Arc::new(AtomicUsize::new(0));
    let bus = SharedDispatcher::new();

    let counted = calls.clone();
    bus.subscribe(move |_: CounterMessage| -> Result<(), HandlerFailure> {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let message: Box<dyn typebus::AnyMessage> = Box::new(CounterMessage { value: 3 });
    bus.publish_any(message).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
