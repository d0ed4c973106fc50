use ringq::error::Error;
use ringq::{BoundedQueue, QueueState, DEFAULT_CAPACITY};

// q0: no elements
// q1: [1]
// q2: [2, 3]
struct Fixture {
    q0: BoundedQueue,
    q1: BoundedQueue,
    q2: BoundedQueue,
}

fn setup() -> Fixture {
    let q0 = BoundedQueue::default();
    let mut q1 = BoundedQueue::default();
    let mut q2 = BoundedQueue::default();

    q1.enqueue(1).unwrap();
    q2.enqueue(2).unwrap();
    q2.enqueue(3).unwrap();

    Fixture { q0, q1, q2 }
}

#[test]
fn is_empty_initially() {
    let f = setup();
    assert_eq!(f.q0.len(), 0);
    assert!(f.q0.is_empty());
    assert_eq!(f.q0.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn sizes_after_setup() {
    let f = setup();
    assert_eq!(f.q1.len(), 1);
    assert_eq!(f.q2.len(), 2);
    assert_eq!(f.q2.state(), QueueState::Partial);
}

#[test]
fn dequeue_works() {
    let mut f = setup();

    assert_eq!(f.q0.dequeue(), None);

    assert_eq!(f.q1.dequeue(), Some(1));
    assert_eq!(f.q1.len(), 0);

    assert_eq!(f.q2.dequeue(), Some(2));
    assert_eq!(f.q2.len(), 1);
    assert_eq!(f.q2.dequeue(), Some(3));
    assert_eq!(f.q2.len(), 0);
}

#[test]
fn overflow_is_an_error() {
    let mut queue = BoundedQueue::with_capacity(1).unwrap();
    queue.enqueue(5).unwrap();

    let err = queue.enqueue(6).unwrap_err();
    assert!(matches!(err, Error::QueueFull { capacity: 1 }));
    assert_eq!(err.to_string(), "queue is full (capacity 1)");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue(), Some(5));
}

#[test]
fn underflow_is_not_an_error() {
    let mut queue = BoundedQueue::with_capacity(3).unwrap();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.state(), QueueState::Empty);
}

#[test]
fn fill_to_default_capacity() {
    let mut queue = BoundedQueue::default();
    for i in 0..DEFAULT_CAPACITY as i32 {
        queue.enqueue(i).unwrap();
    }
    assert!(queue.is_full());
    assert!(queue.enqueue(-1).is_err());

    for i in 0..DEFAULT_CAPACITY as i32 {
        assert_eq!(queue.dequeue(), Some(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn shared_behind_a_mutex() {
    use std::sync::{Arc, Mutex};

    let queue = Arc::new(Mutex::new(BoundedQueue::with_capacity(400).unwrap()));
    let handles = (0..4)
        .map(|t| {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                for i in 0..100 {
                    queue.lock().unwrap().enqueue(t * 100 + i).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut queue = queue.lock().unwrap();
    assert!(queue.is_full());

    let mut values = Vec::new();
    while let Some(value) = queue.dequeue() {
        values.push(value);
    }
    values.sort();
    assert_eq!(values, (0..400).collect::<Vec<_>>());
}
