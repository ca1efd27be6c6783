use cursive_table_view::{TableView, TableViewItem};
use paging_sim::{render, DefaultPager, PageNumber, PageTableEntry, Policy, Snapshot};

use cursive::{
    view::{Nameable, Resizable},
    views::{Button, Dialog, DummyView, EditView, LinearLayout, Panel, SelectView, TextView},
    Cursive,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
enum PageColumn {
    Page,
    Frame,
    Valid,
    LastUsed,
}

#[derive(Debug, Clone, PartialEq)]
struct PageRow {
    page_number: PageNumber,
    entry: PageTableEntry,
}

impl TableViewItem<PageColumn> for PageRow {
    fn to_column(&self, column: PageColumn) -> String {
        match column {
            PageColumn::Page => self.page_number.to_string(),
            PageColumn::Frame => self
                .entry
                .get_frame_number()
                .map_or_else(|| "-".to_string(), |frame| frame.to_string()),
            PageColumn::Valid => u8::from(self.entry.is_resident()).to_string(),
            PageColumn::LastUsed => self
                .entry
                .last_used()
                .map_or_else(|| "-".to_string(), |tick| tick.to_string()),
        }
    }

    fn cmp(&self, other: &Self, column: PageColumn) -> std::cmp::Ordering
    where
        Self: Sized,
    {
        match column {
            PageColumn::Page => self.page_number.cmp(&other.page_number),
            PageColumn::Frame => self
                .entry
                .get_frame_number()
                .cmp(&other.entry.get_frame_number()),
            PageColumn::Valid => self.entry.is_resident().cmp(&other.entry.is_resident()),
            PageColumn::LastUsed => self.entry.last_used().cmp(&other.entry.last_used()),
        }
    }
}

type PageTableView = TableView<PageRow, PageColumn>;

fn make_table() -> PageTableView {
    PageTableView::new()
        .column(PageColumn::Page, "Page", |c| c.width(6))
        .column(PageColumn::Frame, "Frame", |c| c.width(7))
        .column(PageColumn::Valid, "Valid", |c| c.width(7))
        .column(PageColumn::LastUsed, "Last Used", |c| c)
}

fn rows(snapshot: &Snapshot) -> Vec<PageRow> {
    snapshot
        .page_table
        .iter()
        .enumerate()
        .map(|(page_number, entry)| PageRow {
            page_number,
            entry: *entry,
        })
        .collect()
}

/// Redraws every view from the current pager state.
fn refresh(s: &mut Cursive) {
    let snapshot = match s.with_user_data(|pager: &mut DefaultPager| pager.snapshot()) {
        Some(snapshot) => snapshot,
        None => return,
    };
    s.call_on_name("page_table", |view: &mut PageTableView| {
        view.set_items(rows(&snapshot));
    });
    s.call_on_name("frames", |view: &mut TextView| {
        view.set_content(render::frames(&snapshot));
    });
    s.call_on_name("backing_store", |view: &mut TextView| {
        view.set_content(render::backing_store(&snapshot));
    });
    s.call_on_name("counters", |view: &mut TextView| {
        view.set_content(render::counters(&snapshot));
    });
}

fn report(s: &mut Cursive, message: String) {
    s.call_on_name("last_access", |view: &mut TextView| {
        view.set_content(message);
    });
}

fn on_access(s: &mut Cursive, input: &str) {
    let address = match input.trim().parse::<usize>() {
        Ok(address) => address,
        Err(_) => {
            s.add_layer(Dialog::info(format!("'{}' is not a valid logical address", input.trim())));
            return;
        }
    };
    let outcome = s.with_user_data(|pager: &mut DefaultPager| pager.access(address));
    match outcome {
        Some(Ok(access)) => report(s, render::access(&access)),
        Some(Err(err)) => report(s, err.to_string()),
        None => log::error!("Pager is missing from the UI state"),
    }
    refresh(s);
}

fn on_access_button(s: &mut Cursive) {
    let input = s
        .call_on_name("address", |view: &mut EditView| view.get_content())
        .map(|content| content.to_string())
        .unwrap_or_default();
    on_access(s, &input);
}

fn on_reset(s: &mut Cursive) {
    s.with_user_data(|pager: &mut DefaultPager| pager.reset());
    report(s, String::from("Memory reset"));
    refresh(s);
}

fn on_policy(s: &mut Cursive, policy: &Policy) {
    let policy = *policy;
    s.with_user_data(|pager: &mut DefaultPager| pager.set_policy(policy));
    refresh(s);
}

fn main() {
    env_logger::init();

    let mut siv = cursive::default();
    siv.set_user_data(DefaultPager::new());
    siv.add_global_callback(cursive::event::Key::Esc, |s| s.quit());

    let mut policies = SelectView::<Policy>::new().popup();
    for policy in Policy::ALL {
        policies.add_item(policy.to_string(), policy);
    }
    let policies = policies.on_submit(on_policy);

    let controls = LinearLayout::horizontal()
        .child(
            EditView::new()
                .on_submit(on_access)
                .with_name("address")
                .fixed_width(12),
        )
        .child(Button::new("Access Memory", on_access_button))
        .child(Button::new("Reset", on_reset))
        .child(DummyView)
        .child(policies)
        .child(DummyView)
        .child(Button::new("Quit", |s| s.quit()));

    let memory = LinearLayout::horizontal()
        .child(Panel::new(make_table().with_name("page_table").min_size((40, 13))).title("Page Table"))
        .child(Panel::new(TextView::new("").with_name("frames")).title("Main Memory"));

    let layout = LinearLayout::vertical()
        .child(controls)
        .child(TextView::new("Enter a logical address").with_name("last_access"))
        .child(memory)
        .child(Panel::new(TextView::new("").with_name("backing_store")).title("Secondary Memory"))
        .child(TextView::new("").with_name("counters"));

    siv.add_layer(Dialog::around(layout).title("Page Replacement Algorithms"));
    refresh(&mut siv);
    siv.run();
}
