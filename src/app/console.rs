use crate::app::presenter::Presenter;
use crate::core::resolver::Resolver;
use crate::core::session::{ResultState, SearchSession, SearchTicket};
use crate::core::{DatasetSource, Record, RemoteLookup};
use crate::utils::error::{LookupError, Result};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{self, JoinSet};

type SearchOutcome = (SearchTicket, Result<Record>);

/// Line-oriented search front end. Each input line is one search; input keeps
/// being read while earlier searches are still running.
pub struct Console<D, R, W>
where
    D: DatasetSource + 'static,
    R: RemoteLookup + 'static,
    W: Write,
{
    resolver: Arc<Resolver<D, R>>,
    presenter: Presenter<W>,
    session: SearchSession,
}

impl<D, R, W> Console<D, R, W>
where
    D: DatasetSource + 'static,
    R: RemoteLookup + 'static,
    W: Write,
{
    pub fn new(resolver: Resolver<D, R>, out: W) -> Self {
        Self {
            resolver: Arc::new(resolver),
            presenter: Presenter::new(out),
            session: SearchSession::new(),
        }
    }

    pub fn state(&self) -> &ResultState {
        self.session.state()
    }

    pub fn into_writer(self) -> W {
        self.presenter.into_inner()
    }

    /// Runs a single search to completion and renders it.
    pub async fn search_once(&mut self, query: &str) -> Result<&ResultState> {
        let ticket = self.session.begin_search(query);
        self.presenter.render(self.session.state())?;

        let outcome = self.resolver.resolve(query).await;
        self.session.complete(ticket, outcome);
        self.presenter.render(self.session.state())?;

        Ok(self.session.state())
    }

    /// Reads queries until end of input, then waits for in-flight searches.
    /// Neither a bad input line nor a failed search task ends the session.
    pub async fn run<I>(&mut self, mut input: I) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        self.presenter.title()?;
        self.presenter.prompt()?;

        let mut buf = Vec::new();
        let mut searches: JoinSet<SearchOutcome> = JoinSet::new();
        let mut tickets: HashMap<task::Id, SearchTicket> = HashMap::new();
        let mut input_open = true;

        loop {
            tokio::select! {
                // read_until keeps partial bytes in `buf` if another branch wins.
                read = input.read_until(b'\n', &mut buf), if input_open => {
                    match read {
                        Ok(0) => {
                            tracing::debug!("Input closed, {} searches in flight", searches.len());
                            input_open = false;
                        }
                        Ok(_) => {
                            let query = decode_line(&buf);
                            buf.clear();
                            self.trigger(&mut searches, &mut tickets, query)?;
                        }
                        Err(e) => {
                            tracing::error!("Failed to read input: {}", e);
                            input_open = false;
                        }
                    }
                }
                Some(joined) = searches.join_next_with_id() => {
                    let (ticket, outcome) = match joined {
                        Ok((id, (ticket, outcome))) => {
                            tickets.remove(&id);
                            (ticket, outcome)
                        }
                        Err(e) => match tickets.remove(&e.id()) {
                            Some(ticket) => {
                                tracing::error!("Search task failed: {}", e);
                                (ticket, Err(LookupError::TaskError(e)))
                            }
                            None => continue,
                        },
                    };
                    if self.session.complete(ticket, outcome) {
                        self.presenter.render(self.session.state())?;
                        if input_open {
                            self.presenter.prompt()?;
                        }
                    }
                }
                else => break,
            }
        }

        Ok(())
    }

    fn trigger(
        &mut self,
        searches: &mut JoinSet<SearchOutcome>,
        tickets: &mut HashMap<task::Id, SearchTicket>,
        query: String,
    ) -> Result<()> {
        let ticket = self.session.begin_search(query.as_str());
        self.presenter.render(self.session.state())?;

        let resolver = Arc::clone(&self.resolver);
        let handle = searches.spawn(async move {
            let outcome = resolver.resolve(&query).await;
            (ticket, outcome)
        });
        tickets.insert(handle.id(), ticket);
        Ok(())
    }
}

/// One input line without its line ending. Invalid UTF-8 is replaced, not rejected.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let text = String::from_utf8_lossy(line);
    if let std::borrow::Cow::Owned(_) = text {
        tracing::warn!("Input line was not valid UTF-8; searching for {:?}", text);
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiseaseDataset, RemoteCandidate};
    use async_trait::async_trait;

    struct StaticDataset;

    impl DatasetSource for StaticDataset {
        async fn load(&self) -> Result<DiseaseDataset> {
            Ok([("flu".to_string(), Record::new(["fever", "cough"], ["rest"]))]
                .into_iter()
                .collect())
        }
    }

    struct EmptyRemote;

    #[async_trait]
    impl RemoteLookup for EmptyRemote {
        async fn lookup(&self, _query: &str) -> Result<Option<RemoteCandidate>> {
            Ok(None)
        }
    }

    struct OfflineRemote;

    #[async_trait]
    impl RemoteLookup for OfflineRemote {
        async fn lookup(&self, _query: &str) -> Result<Option<RemoteCandidate>> {
            Err(LookupError::RemoteFetchError {
                message: "offline".to_string(),
            })
        }
    }

    struct PanickingRemote;

    #[async_trait]
    impl RemoteLookup for PanickingRemote {
        async fn lookup(&self, query: &str) -> Result<Option<RemoteCandidate>> {
            panic!("remote exploded on {}", query);
        }
    }

    #[tokio::test]
    async fn test_search_once_renders_loading_then_result() {
        let mut console = Console::new(Resolver::new(StaticDataset, EmptyRemote), Vec::new());

        let state = console.search_once("Flu").await.unwrap().clone();

        assert_eq!(
            state,
            ResultState::Found(Record::new(["fever", "cough"], ["rest"]))
        );
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.starts_with("Loading...\n"));
        assert!(output.contains("  • cough"));
    }

    #[tokio::test]
    async fn test_search_once_failure_keeps_console_usable() {
        let mut console = Console::new(Resolver::new(StaticDataset, OfflineRemote), Vec::new());

        let state = console.search_once("cholera").await.unwrap().clone();
        assert_eq!(state, ResultState::Failed("Failed to fetch data.".to_string()));

        let state = console.search_once("FLU").await.unwrap().clone();
        assert!(state.record().is_some());
    }

    #[tokio::test]
    async fn test_run_reads_until_end_of_input() {
        let mut console = Console::new(Resolver::new(StaticDataset, EmptyRemote), Vec::new());

        console.run(&b"zika\n"[..]).await.unwrap();

        assert_eq!(console.state(), &ResultState::NotFound);
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("Loading...\n"));
        assert!(output.contains("❌ Disease not found.\n"));
    }

    #[tokio::test]
    async fn test_run_last_triggered_search_wins() {
        let mut console = Console::new(Resolver::new(StaticDataset, EmptyRemote), Vec::new());

        console.run(&b"zika\r\nflu\n"[..]).await.unwrap();

        assert_eq!(
            console.state(),
            &ResultState::Found(Record::new(["fever", "cough"], ["rest"]))
        );
    }

    #[tokio::test]
    async fn test_run_without_input_stays_idle() {
        let mut console = Console::new(Resolver::new(StaticDataset, EmptyRemote), Vec::new());

        console.run(&b""[..]).await.unwrap();

        assert_eq!(console.state(), &ResultState::Idle);
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.ends_with("Enter disease name: "));
    }

    #[tokio::test]
    async fn test_run_survives_invalid_utf8_line() {
        let mut console = Console::new(Resolver::new(StaticDataset, EmptyRemote), Vec::new());

        console.run(&b"caf\xe9\nflu\n"[..]).await.unwrap();

        assert_eq!(
            console.state(),
            &ResultState::Found(Record::new(["fever", "cough"], ["rest"]))
        );
    }

    #[tokio::test]
    async fn test_run_panicking_search_becomes_failure() {
        let mut console = Console::new(Resolver::new(StaticDataset, PanickingRemote), Vec::new());

        console.run(&b"ebola\n"[..]).await.unwrap();

        assert_eq!(
            console.state(),
            &ResultState::Failed("Failed to fetch data.".to_string())
        );
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("❌ Failed to fetch data.\n"));
    }

    #[test]
    fn test_decode_line_strips_endings_and_replaces_bad_bytes() {
        assert_eq!(decode_line(b"Flu\r\n"), "Flu");
        assert_eq!(decode_line(b"gout"), "gout");
        assert_eq!(decode_line(b"\n"), "");
        assert_eq!(decode_line(b"caf\xe9\n"), "caf\u{FFFD}");
    }
}
