//! Page structure shared by the server and the browser: which sections exist,
//! in what order, and the anchors the navigation bar links to.

/// Vertical scroll offset past which the back-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Education,
    Skills,
    Publications,
    Talks,
    Awards,
    Volunteering,
    Contact,
}

impl SectionId {
    /// Sections below the hero, top to bottom.
    pub const PAGE_ORDER: [SectionId; 9] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Publications,
        SectionId::Talks,
        SectionId::Awards,
        SectionId::Volunteering,
        SectionId::Contact,
    ];

    /// Element id, stable so in-page links keep working.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Publications => "publications",
            SectionId::Talks => "talks",
            SectionId::Awards => "awards",
            SectionId::Volunteering => "volunteering",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink {
        label: "About",
        target: SectionId::About,
    },
    NavLink {
        label: "Experience",
        target: SectionId::Experience,
    },
    NavLink {
        label: "Education",
        target: SectionId::Education,
    },
    NavLink {
        label: "Skills",
        target: SectionId::Skills,
    },
    NavLink {
        label: "Publications",
        target: SectionId::Publications,
    },
    NavLink {
        label: "Awards",
        target: SectionId::Awards,
    },
    NavLink {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub fn shows_scroll_to_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Expand/collapse state of a list where at most one row is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

/// The skill list repeated once, so a ticker scrolled by half its width
/// lines up with where it started.
pub fn ticker_items<T>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().chain(items.iter())
}
