// Example: derive row entities from keys while "scrolling" a viewport.
use std::sync::Arc;

use vseq::{KeyedListOptions, KeyedVirtualList};

#[derive(Debug)]
struct Row {
    title: String,
}

fn main() {
    let keys: Vec<String> = (0..50_000).map(|i| format!("pkg-{i:05}")).collect();
    let options = KeyedListOptions::new(|key: &String| {
        // Pretend some records are unreadable right now.
        if key.ends_with('7') {
            return None;
        }
        Some(Row {
            title: key.to_uppercase(),
        })
    })
    .with_recency_capacity(60);
    let list = KeyedVirtualList::with_keys(options, keys);

    // Scroll down three viewports of 20 rows, then back up one.
    for top in [0usize, 20, 40, 20] {
        let mut shown = 0;
        let mut chars = 0;
        list.for_each_in(top..top + 20, |_, row: Arc<Row>| {
            shown += 1;
            chars += row.title.len();
        });
        println!(
            "top={top} shown={shown} chars={chars} live_slots={} recency={} stats={:?}",
            list.live_slots(),
            list.recency_len(),
            list.stats()
        );
    }

    println!("row 3 = {:?}", list.get(3));
    println!("row 7 = {:?}", list.get(7));
    println!("row 99999 = {:?}", list.get(99_999));
}
