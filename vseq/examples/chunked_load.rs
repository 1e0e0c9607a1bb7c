// Example: load a large dataset in chunks, yielding between chunks.
use std::time::Duration;

use vseq::{WindowOptions, WindowedSeq, yield_now};

fn main() {
    let mut w = WindowedSeq::new(WindowOptions::new(10, 5).with_chunk_size(20));
    w.subscribe(|ev: &vseq::SeqEvent| {
        if ev.is_reset() {
            println!("reset");
        }
    });
    w.set_all(0..100u32);

    let chunks = pollster::block_on(w.load_all_async(20, Duration::from_millis(16), |delay| {
        // A real host would await its frame timer here.
        println!("pause {delay:?}");
        yield_now()
    }));
    println!("chunks={chunks} state={:?}", w.state());
}
