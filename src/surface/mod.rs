use colored::Colorize;

use crate::directory::PersonRecord;

// the compact summary shown for one person in the gallery grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub locality: String,
}

impl CardView {
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.full_name(),
            email: record.email.clone(),
            locality: record.locality(),
        }
    }
}

// the full overlay shown for one person
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailCard {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthdate: String,
    pub portrait_url: String,
}

impl DetailCard {
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.full_name(),
            email: record.email.clone(),
            city: record.city.clone(),
            phone: record.phone.clone(),
            address: record.street_address(),
            birthdate: record.birthdate.clone(),
            portrait_url: record.portrait_url.clone(),
        }
    }
}

// enabled/disabled state of the pagination controls, derived from the
// position within the rendered sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// The rendering substrate the page logic draws on. Stands in for the DOM:
/// it can replace the gallery, show or remove the single detail node, and
/// report diagnostics. `remove_detail` must be idempotent so nested
/// dispatches cannot turn a double removal into an error.
pub trait Surface {
    fn render_gallery(&mut self, cards: &[CardView]);
    fn render_detail(&mut self, detail: &DetailCard, pager: PagerControls);
    fn remove_detail(&mut self);
    fn report(&mut self, message: &str);
    // informational line, distinct from an error diagnostic
    fn note(&mut self, _message: &str) {}
}

/// Terminal implementation backed by stdout/stderr.
#[derive(Debug, Default)]
pub struct TermSurface {
    detail_open: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TermSurface {
    fn render_gallery(&mut self, cards: &[CardView]) {
        println!();
        if cards.is_empty() {
            println!("{}", "no people to display".dimmed());
            return;
        }
        for (idx, card) in cards.iter().enumerate() {
            println!(
                "{} {:<24} {:<34} {}",
                format!("[{:>2}]", idx + 1).bold().cyan(),
                card.name.bold(),
                card.email.dimmed(),
                card.locality
            );
        }
        println!();
    }

    fn render_detail(&mut self, detail: &DetailCard, pager: PagerControls) {
        // replaces whatever detail is on screen; the terminal scrolls the
        // old one away on its own
        self.detail_open = true;

        let pager_line = format!(
            "{}  {}",
            if pager.prev_enabled {
                "< prev".bold().cyan()
            } else {
                "< prev".dimmed()
            },
            if pager.next_enabled {
                "next >".bold().cyan()
            } else {
                "next >".dimmed()
            }
        );

        println!();
        println!("{}", "-".repeat(56).dimmed());
        println!(":: {:<10}: {}", "name", detail.name.bold());
        println!(":: {:<10}: {}", "email", detail.email);
        println!(":: {:<10}: {}", "city", detail.city);
        println!(":: {:<10}: {}", "phone", detail.phone);
        println!(":: {:<10}: {}", "address", detail.address);
        println!(":: {:<10}: {}", "birthday", detail.birthdate);
        println!(":: {:<10}: {}", "portrait", detail.portrait_url.dimmed());
        println!("{}", pager_line);
        println!("{}", "-".repeat(56).dimmed());
    }

    fn remove_detail(&mut self) {
        if self.detail_open {
            println!("{}", "detail view closed".dimmed());
        }
        self.detail_open = false;
    }

    fn report(&mut self, message: &str) {
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "ERR".bold().red(),
            "]".bold().white(),
            message
        );
    }

    fn note(&mut self, message: &str) {
        println!("{}", message.dimmed());
    }
}
