use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::*;
use crate::Error;

#[test]
fn runs_steps_in_order_and_returns_the_terminal_value() {
    const STEPS: usize = 8;

    let order = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&order);
    let mut stage = 0usize;

    let value = run(move |resume: Resume<usize>| -> Flow<usize, &'static str> {
        assert!(resume.is_empty());
        if stage == STEPS {
            return Flow::Done("done");
        }
        stage += 1;
        let index = stage;
        let seen = Arc::clone(&seen);
        Flow::step(move |cb: Continuation<usize, &'static str>| {
            seen.lock().unwrap().push(index);
            let _ = cb.resume();
        })
    })
    .unwrap();

    assert_eq!(value, "done");
    assert_eq!(*order.lock().unwrap(), (1..=STEPS).collect::<Vec<_>>());
}

#[test]
fn threaded_value_reaches_the_resume_point() {
    let mut stage = 0;
    let value = run(move |resume: Resume<String>| -> Flow<String, String> {
        match stage {
            0 => {
                stage = 1;
                Flow::step(|cb: Continuation<String, String>| {
                    let _ = cb.resume_with("from the step".to_owned());
                })
            }
            _ => match resume {
                Resume::Value(v) => Flow::Done(v),
                Resume::Empty => panic!("expected a threaded value"),
            },
        }
    })
    .unwrap();

    assert_eq!(value, "from the step");
}

#[test]
fn plain_resume_carries_no_value() {
    let mut stage = 0;
    let value = run(move |resume: Resume<i32>| -> Flow<i32, bool> {
        match stage {
            0 => {
                stage = 1;
                Flow::step(|cb: Continuation<i32, bool>| {
                    let _ = cb.resume();
                })
            }
            _ => Flow::Done(resume.is_empty()),
        }
    })
    .unwrap();

    assert!(value);
}

#[test]
fn immediate_completion_returns_without_pulling_a_step() {
    let value = run(|_: Resume<()>| -> Flow<(), i32> { Flow::Done(7) });
    assert_eq!(value, Ok(7));
}

#[test]
fn asynchronous_completion_wakes_the_blocked_caller() {
    let mut stage = 0;
    let value = run_for(
        move |resume: Resume<u64>| -> Flow<u64, u64> {
            match stage {
                0 => {
                    stage = 1;
                    Flow::step(|cb: Continuation<u64, u64>| {
                        thread::spawn(move || {
                            thread::sleep(Duration::from_millis(20));
                            let _ = cb.resume_with(99);
                        });
                    })
                }
                _ => match resume {
                    Resume::Value(v) => Flow::Done(v),
                    Resume::Empty => panic!("expected a threaded value"),
                },
            }
        },
        Duration::from_secs(5),
    )
    .unwrap();

    assert_eq!(value, 99);
}

#[test]
fn spawn_discards_the_terminal_value() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut stage = 0;

    spawn(move |_: Resume<()>| -> Flow<(), i32> {
        match stage {
            0 => {
                stage = 1;
                let tx = tx.clone();
                Flow::step(move |cb: Continuation<(), i32>| {
                    tx.send(()).unwrap();
                    let _ = cb.resume();
                })
            }
            _ => Flow::Done(3),
        }
    });

    // The step completed synchronously, so the marker is already queued.
    rx.recv_timeout(Duration::from_secs(1)).unwrap();
}

#[test]
fn late_continuation_observes_exhaustion() {
    let escaped = Arc::new(Mutex::new(None::<Continuation<(), i32>>));
    let stash = Arc::clone(&escaped);
    let mut stage = 0;

    let value = run(move |_: Resume<()>| -> Flow<(), i32> {
        match stage {
            0 => {
                stage = 1;
                let stash = Arc::clone(&stash);
                Flow::step(move |cb: Continuation<(), i32>| {
                    *stash.lock().unwrap() = Some(cb.clone());
                    let _ = cb.resume();
                })
            }
            _ => Flow::Done(5),
        }
    })
    .unwrap();
    assert_eq!(value, 5);

    let cb = escaped.lock().unwrap().take().unwrap();
    assert_eq!(cb.resume(), Err(Error::SequenceExhausted));
    assert_eq!(cb.resume_with(()), Err(Error::SequenceExhausted));
}

#[test]
fn dropping_every_continuation_reports_a_stall() {
    let value = run(|_: Resume<()>| -> Flow<(), ()> { Flow::step(|_cb| {}) });
    assert_eq!(value, Err(Error::Stalled));
}

#[test]
fn run_for_times_out_while_a_continuation_is_still_live() {
    let held = Arc::new(Mutex::new(None::<Continuation<(), ()>>));
    let stash = Arc::clone(&held);

    let value = run_for(
        move |_: Resume<()>| -> Flow<(), ()> {
            let stash = Arc::clone(&stash);
            Flow::step(move |cb| {
                *stash.lock().unwrap() = Some(cb);
            })
        },
        Duration::from_millis(50),
    );

    assert_eq!(value, Err(Error::WaitTimeout));
    assert!(held.lock().unwrap().is_some());
}

#[test]
fn resume_payload_helpers_round_out_the_enum() {
    assert_eq!(Resume::<i32>::Empty.into_value(), None);
    assert_eq!(Resume::Value(3).into_value(), Some(3));
    assert!(Resume::<i32>::Empty.is_empty());
    assert!(!Resume::Value(3).is_empty());
}
