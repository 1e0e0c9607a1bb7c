use vseq::WindowOptions;
use vseq_adapter::WindowController;

fn main() {
    // Example: chunked loading driven by a frame loop instead of an executor.
    //
    // An adapter would:
    // - call start_load_all(..) in response to a "show everything" command
    // - call tick(now_ms) from its frame loop / timer
    // - re-render rows whenever the sequence reports a reset
    let mut c = WindowController::<u32>::new(WindowOptions::new(100, 50));
    c.set_all(0..10_000);
    c.start_load_all(1_000, 32, 0);

    let mut now_ms = 0u64;
    while c.is_loading() {
        now_ms += 16;
        if let Some(loaded) = c.tick(now_ms) {
            println!("t={now_ms} loaded={loaded}/{}", c.seq().total_count());
        }
    }

    // Scroll-driven growth on a fresh dataset.
    c.set_all(0..500);
    for end in [40usize, 80, 95, 140] {
        let grew = c.on_visible_end(end);
        println!("visible_end={end} grew={grew} loaded={}", c.seq().loaded_count());
    }
}
