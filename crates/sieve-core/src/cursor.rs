use sieve_types::LookupResult;

/// Ordered lookup results for one query and a wrapping position into them.
///
/// Results without definition text are dropped on the way in, so every
/// navigable result has text to show. Navigation methods return the new
/// position, or `None` when there is nothing to navigate.
#[derive(Debug, Default)]
pub struct NavigationCursor {
    results: Vec<LookupResult>,
    position: Option<usize>,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the result set. The cursor starts at the first result.
    pub fn set_results(&mut self, results: Vec<LookupResult>) -> Option<usize> {
        self.results = results.into_iter().filter(LookupResult::has_definition).collect();
        self.position = if self.results.is_empty() { None } else { Some(0) };
        self.position
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.position.and_then(|p| self.results.get(p))
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[LookupResult] {
        &self.results
    }

    pub fn next(&mut self) -> Option<usize> {
        let len = self.results.len();
        self.move_to(|p| if p + 1 >= len { 0 } else { p + 1 })
    }

    pub fn previous(&mut self) -> Option<usize> {
        let last = self.results.len().saturating_sub(1);
        self.move_to(|p| if p == 0 { last } else { p - 1 })
    }

    pub fn first(&mut self) -> Option<usize> {
        self.move_to(|_| 0)
    }

    pub fn last(&mut self) -> Option<usize> {
        let last = self.results.len().saturating_sub(1);
        self.move_to(|_| last)
    }

    pub fn reset(&mut self) {
        self.results.clear();
        self.position = None;
    }

    /// `position+1/count`, or `0/0` when empty
    pub fn counter(&self) -> String {
        match self.position {
            Some(p) => format!("{}/{}", p + 1, self.results.len()),
            None => "0/0".to_string(),
        }
    }

    fn move_to(&mut self, step: impl FnOnce(usize) -> usize) -> Option<usize> {
        let position = step(self.position?);
        self.position = Some(position);
        self.position
    }
}
