// Example: bulk population with one notification, then incremental window growth.
use vseq::{BulkSeq, SeqEvent, WindowedSeq};

fn main() {
    let mut seq = BulkSeq::new();
    seq.subscribe(|ev: &SeqEvent| println!("bulk: {ev:?}"));
    seq.add_range((0..10_000).map(|i| format!("record-{i}")));
    seq.add_range(Vec::new()); // silent
    println!("bulk len={}", seq.len());

    let mut w = WindowedSeq::with_sizes(100, 50);
    w.subscribe(|ev: &SeqEvent| {
        if ev.is_reset() {
            println!("window: reset");
        }
    });
    w.set_all(seq.iter().cloned());
    println!("after set_all: {:?}", w.state());

    w.load_more();
    println!("after load_more: {:?}", w.state());

    w.add_items((0..20).map(|i| format!("late-{i}")));
    println!("after add_items: {:?}", w.state());

    w.load_all();
    println!("after load_all: {:?}", w.state());
}
