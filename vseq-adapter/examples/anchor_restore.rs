use vseq::{KeyedListOptions, KeyedVirtualList};
use vseq_adapter::{capture_anchor, restore_anchor};

fn main() {
    // Example: keep the viewport on the same message after older ones are prepended.
    let options = KeyedListOptions::from_fn(|id: &u64| format!("message #{id}"));
    let mut list = KeyedVirtualList::with_keys(options, 1_000u64..1_100);

    let top = 40;
    let anchor = capture_anchor(&list, top).expect("top row exists");
    println!("anchored {:?}", anchor);

    // Prepend 50 older messages.
    list.set_keys((950u64..1_000).chain(1_000..1_100));

    if let Some(index) = restore_anchor(&list, &anchor) {
        println!("scroll to {index}: {:?}", list.get(index));
    }
}
