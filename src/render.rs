//! Plain-text views of a [`Snapshot`] for terminal front ends.

use std::fmt::Write;

use crate::pager::{Access, Snapshot};

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

pub fn page_table(snapshot: &Snapshot) -> String {
    let mut text = String::from("Page Number | Frame Number | Valid | Last Used\n");
    text.push_str("----------------------------------------------\n");
    for (page_number, entry) in snapshot.page_table.iter().enumerate() {
        let _ = writeln!(
            text,
            "{:>11} | {:>12} | {:>5} | {:>9}",
            page_number,
            or_dash(entry.get_frame_number()),
            u8::from(entry.is_resident()),
            or_dash(entry.last_used()),
        );
    }
    text
}

pub fn frames(snapshot: &Snapshot) -> String {
    let mut text = String::from("Frame Number | Page | Content\n");
    text.push_str("-----------------------------\n");
    let owners = snapshot.frame_owners();
    for (frame_number, owner) in owners.into_iter().enumerate() {
        let _ = write!(text, "{:>12} | {:>4} |", frame_number, or_dash(owner));
        for word in snapshot.frame(frame_number).unwrap_or_default() {
            let _ = write!(text, " {:>2}", word);
        }
        text.push('\n');
    }
    text
}

pub fn backing_store(snapshot: &Snapshot) -> String {
    let mut text = String::from("Secondary Memory Content\n");
    text.push_str("------------------------\n");
    let page_size = snapshot.frame_size.max(1);
    for (page_number, page) in snapshot.backing_store.chunks(page_size).enumerate() {
        let _ = write!(text, "Page {}:", page_number);
        for word in page {
            let _ = write!(text, "{:>3}", word);
        }
        text.push('\n');
    }
    text
}

pub fn load_queue(snapshot: &Snapshot) -> String {
    let slots: Vec<String> = snapshot.load_queue.iter().copied().map(or_dash).collect();
    format!("Load order: [{}]", slots.join(", "))
}

pub fn history(snapshot: &Snapshot) -> String {
    let addresses: Vec<String> = snapshot.history.iter().map(usize::to_string).collect();
    format!("Accesses ({}): {}", addresses.len(), addresses.join(" "))
}

pub fn counters(snapshot: &Snapshot) -> String {
    format!(
        "Page Hits: {}  Page Faults: {}  Policy: {}",
        snapshot.hits, snapshot.faults, snapshot.policy
    )
}

pub fn access(access: &Access) -> String {
    let mut text = if access.hit {
        format!(
            "Page {} is in memory at frame {}.\n",
            access.page_number, access.frame_number
        )
    } else {
        match access.evicted {
            Some(victim) => format!(
                "Page fault! Page {} loaded into frame {}, evicting page {}.\n",
                access.page_number, access.frame_number, victim
            ),
            None => format!(
                "Page fault! Page {} loaded into free frame {}.\n",
                access.page_number, access.frame_number
            ),
        }
    };
    let _ = write!(
        text,
        "Logical address {} maps to physical address {} with value {}",
        access.logical_address, access.physical_address, access.word
    );
    text
}
