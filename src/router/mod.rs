use crate::directory::Directory;
use crate::gallery::Gallery;
use crate::modal::{Modal, PagerDirection};
use crate::search;
use crate::surface::Surface;

// what an `open` refers to: a 1-based gallery position or a raw id
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenTarget {
    Position(usize),
    Id(String),
}

// one named operation per UI action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Open(OpenTarget),
    Next,
    Prev,
    Close,
    List,
    Help,
    Quit,
}

impl Command {
    /// Parses one line of interactive input.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        // "/mette" and "/ mette" both search
        if let Some(rest) = line.strip_prefix('/') {
            return Ok(Self::Search(rest.trim().to_string()));
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "open" | "o" => {
                if rest.is_empty() {
                    return Err("open requires a card number or id".to_string());
                }
                match rest.parse::<usize>() {
                    Ok(n) if n >= 1 => Ok(Self::Open(OpenTarget::Position(n))),
                    Ok(_) => Err("card numbers start at 1".to_string()),
                    Err(_) => Ok(Self::Open(OpenTarget::Id(rest.to_string()))),
                }
            }
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "close" | "c" => Ok(Self::Close),
            "list" | "l" => Ok(Self::List),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "" => Err("empty command, try 'help'".to_string()),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }

    pub fn usage() -> &'static str {
        "commands:\n  search <text>   filter cards by name (empty text shows everyone)\n  open <n|id>     open the detail view for a card\n  next / prev     page the open detail view\n  close           close the detail view\n  list            reprint the current cards\n  quit            exit"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// the application state record: built once after the fetch resolves and
// handed to every dispatch, never looked up from ambient globals
#[derive(Debug)]
pub struct Router {
    directory: Directory,
    gallery: Gallery,
    modal: Modal,
}

impl Router {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            gallery: Gallery::new(),
            modal: Modal::new(),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Initial render after the fetch: the full set, unfiltered.
    pub fn render_initial(&mut self, surface: &mut dyn Surface) {
        let all: Vec<&crate::directory::PersonRecord> = self.directory.records().iter().collect();
        self.gallery.render(&all, surface);
    }

    pub fn dispatch(&mut self, command: Command, surface: &mut dyn Surface) -> Flow {
        match command {
            Command::Search(query) => self.search(&query, surface),
            Command::Open(target) => self.open(target, surface),
            Command::Next => {
                self.modal
                    .paginate(PagerDirection::Next, &self.directory, surface);
            }
            Command::Prev => {
                self.modal
                    .paginate(PagerDirection::Prev, &self.directory, surface);
            }
            Command::Close => self.modal.close(surface),
            Command::List => self.relist(surface),
            Command::Help => surface.note(Command::usage()),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Recomputes the rendered set wholesale from the full store. A query
    /// with zero matches leaves the previously rendered cards in place; that
    /// is the intended rule, not a short-circuit accident.
    pub fn search(&mut self, query: &str, surface: &mut dyn Surface) {
        let matched = search::filter(query, self.directory.records());
        if matched.is_empty() {
            surface.note(&format!(
                "no names match '{}'; keeping the current cards",
                query.trim()
            ));
            return;
        }
        self.gallery.render(&matched, surface);
    }

    fn open(&mut self, target: OpenTarget, surface: &mut dyn Surface) {
        let id = match target {
            OpenTarget::Position(n) => match self.gallery.id_at(n - 1) {
                Some(id) => id.to_string(),
                None => {
                    surface.report(&format!("no card at position {n}"));
                    return;
                }
            },
            OpenTarget::Id(id) => id,
        };
        self.modal
            .open(&id, self.gallery.rendered_ids(), &self.directory, surface);
    }

    fn relist(&mut self, surface: &mut dyn Surface) {
        let current: Vec<&crate::directory::PersonRecord> = self
            .gallery
            .rendered_ids()
            .iter()
            .filter_map(|id| self.directory.find_by_id(id))
            .collect();
        self.gallery.render(&current, surface);
    }
}
