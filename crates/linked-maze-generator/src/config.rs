use linked_maze_core::{Page, Position};

/// Shape of one page to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    /// Display label of the page.
    pub name: Option<String>,
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
    /// Start position.
    pub start: Position,
    /// Goal position.
    pub goal: Position,
}

impl PageTemplate {
    /// Creates an unnamed template.
    #[must_use]
    pub fn new(width: u8, height: u8, start: Position, goal: Position) -> Self {
        Self {
            name: None,
            width,
            height,
            start,
            goal,
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds an empty page of this shape.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Page::new`].
    #[must_use]
    pub fn build(&self) -> Page {
        let page = Page::new(self.width, self.height, self.start, self.goal);
        match &self.name {
            Some(name) => page.with_name(name.clone()),
            None => page,
        }
    }
}

/// Settings of a [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// The default describes two 3×4 pages: page 1 runs from (0, 0) to (2, 3),
/// page 2 from (0, 1) to (2, 2), and the target sidetrack depth is 2 with no
/// limit on attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The page that moves first.
    pub first: PageTemplate,
    /// The partner page.
    pub second: PageTemplate,
    /// Sidetrack depth an accepted pair must have.
    pub target_depth: usize,
    /// Number of attempts after which generation gives up, `None` for no limit.
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            first: PageTemplate::new(3, 4, Position::new(0, 0), Position::new(2, 3))
                .with_name("Page 1"),
            second: PageTemplate::new(3, 4, Position::new(0, 1), Position::new(2, 2))
                .with_name("Page 2"),
            target_depth: 2,
            max_attempts: None,
        }
    }
}
