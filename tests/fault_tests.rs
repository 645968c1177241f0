//! First-writer-wins semantics of the fault hand-off channel.

use std::io;

use postmark_exporter::app::{fault_channel, Fault};
use postmark_exporter::error::Error;

fn serve_fault() -> Fault {
    Fault::Serve(Error::Io(io::Error::new(
        io::ErrorKind::AddrInUse,
        "address in use",
    )))
}

#[tokio::test]
async fn only_the_first_fault_is_kept() {
    let (faults, mut fault_rx) = fault_channel();

    faults.report(Fault::Poll(Error::UnexpectedStatus { status: 500 }));
    faults.report(serve_fault());

    let first = fault_rx.recv().await.expect("one fault");
    assert!(matches!(first, Fault::Poll(Error::UnexpectedStatus { status: 500 })));
    assert!(fault_rx.try_recv().is_err(), "second fault dropped");
}

#[tokio::test]
async fn report_never_blocks_with_no_reader() {
    let (faults, fault_rx) = fault_channel();

    // Slot full and nobody reading; both calls must return immediately.
    faults.report(Fault::Poll(Error::UnexpectedStatus { status: 500 }));
    faults.report(Fault::Poll(Error::UnexpectedStatus { status: 404 }));

    drop(fault_rx);

    // Receiver gone entirely; reporting is still a no-op rather than a panic.
    faults.report(serve_fault());
}

#[tokio::test]
async fn senders_from_both_loops_race_to_one_slot() {
    let (faults, mut fault_rx) = fault_channel();
    let poll_side = faults.clone();
    let serve_side = faults.clone();

    let a = tokio::spawn(async move {
        poll_side.report(Fault::Poll(Error::UnexpectedStatus { status: 500 }));
    });
    let b = tokio::spawn(async move {
        serve_side.report(serve_fault());
    });
    a.await.expect("poll side");
    b.await.expect("serve side");

    // Exactly one fault comes out, whichever loop won the race.
    fault_rx.recv().await.expect("one fault");
    assert!(fault_rx.try_recv().is_err());
}
