use crate::core::Record;
use crate::utils::error::{LookupError, Result, FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE};

/// What the presentation layer shows. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    #[default]
    Idle,
    Loading,
    Found(Record),
    NotFound,
    Failed(String),
}

impl ResultState {
    pub fn from_outcome(outcome: Result<Record>) -> Self {
        match outcome {
            Ok(record) => ResultState::Found(record),
            Err(LookupError::NotFound) => ResultState::NotFound,
            Err(_) => ResultState::Failed(FETCH_FAILED_MESSAGE.to_string()),
        }
    }

    /// The error-area text for NotFound and Failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultState::NotFound => Some(NOT_FOUND_MESSAGE),
            ResultState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            ResultState::Found(record) => Some(record),
            _ => None,
        }
    }
}

/// Identifies one triggered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Owns the query text and the result state for one interactive session.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    state: ResultState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    /// Starts a search: drops any previous record or error and enters Loading.
    pub fn begin_search(&mut self, query: impl Into<String>) -> SearchTicket {
        self.query = query.into();
        self.generation += 1;
        self.state = ResultState::Loading;
        tracing::debug!("Search #{} started for {:?}", self.generation, self.query);
        SearchTicket(self.generation)
    }

    /// Applies a finished search. Returns false, leaving the state untouched,
    /// when a newer search has been started since `ticket` was issued.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: Result<Record>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                "Discarding stale result of search #{} (current #{})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.state = ResultState::from_outcome(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = SearchSession::new();
        assert_eq!(session.state(), &ResultState::Idle);
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_search_transitions_to_found() {
        let mut session = SearchSession::new();

        let ticket = session.begin_search("Flu");
        assert!(session.state().is_loading());
        assert_eq!(session.query(), "Flu");

        let record = Record::new(["fever"], ["rest"]);
        assert!(session.complete(ticket, Ok(record.clone())));
        assert_eq!(session.state().record(), Some(&record));
        assert_eq!(session.state().message(), None);
    }

    #[test]
    fn test_failures_map_to_messages() {
        let mut session = SearchSession::new();

        let ticket = session.begin_search("nothing");
        session.complete(ticket, Err(LookupError::NotFound));
        assert_eq!(session.state(), &ResultState::NotFound);
        assert_eq!(session.state().message(), Some("Disease not found."));

        let ticket = session.begin_search("offline");
        session.complete(
            ticket,
            Err(LookupError::RemoteFetchError {
                message: "timeout".to_string(),
            }),
        );
        assert_eq!(
            session.state(),
            &ResultState::Failed("Failed to fetch data.".to_string())
        );
    }

    #[test]
    fn test_new_search_clears_previous_result() {
        let mut session = SearchSession::new();
        let ticket = session.begin_search("flu");
        session.complete(ticket, Ok(Record::new(["fever"], ["rest"])));

        session.begin_search("cold");
        assert_eq!(session.state(), &ResultState::Loading);

        let ticket = session.begin_search("gout");
        session.complete(ticket, Err(LookupError::NotFound));
        session.begin_search("gout");
        assert_eq!(session.state().message(), None);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut session = SearchSession::new();
        let slow = session.begin_search("slow");
        let fast = session.begin_search("fast");

        let fast_record = Record::new(["quick"], ["none"]);
        assert!(session.complete(fast, Ok(fast_record.clone())));
        assert!(!session.complete(slow, Ok(Record::new(["late"], ["late"]))));

        assert_eq!(session.state().record(), Some(&fast_record));
        assert!(slow < fast);
    }
}
