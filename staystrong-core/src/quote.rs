use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{QuoteError, QuoteResult};

pub const DEFAULT_ENDPOINT: &str = "https://hope.passarelli.dev/reasons";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const FALLBACK_QUOTES: [&str; 6] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "You are never too old to set another goal or to dream a new dream. - C.S. Lewis",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
];

pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> QuoteResult<String>;
}

#[derive(Debug, Deserialize)]
struct ReasonPayload {
    reason: String,
    #[serde(default)]
    lang: Option<String>,
}

/// GETs a JSON `{ "reason": ... }` document from a fixed URL.
pub struct HttpQuoteSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpQuoteSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }
}

impl Default for HttpQuoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> QuoteResult<String> {
        let response = self.agent.get(&self.endpoint).call()?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(QuoteError::Status(status));
        }

        let payload: ReasonPayload = response
            .into_json()
            .map_err(|e| QuoteError::Malformed(e.to_string()))?;
        let reason = payload.reason.trim();
        if reason.is_empty() {
            return Err(QuoteError::Malformed("empty reason".to_string()));
        }
        debug!(lang = payload.lang.as_deref().unwrap_or("?"), "quote fetched");
        Ok(reason.to_string())
    }
}

pub fn fallback_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_QUOTES.choose(rng).copied().unwrap_or(FALLBACK_QUOTES[0])
}

/// One attempt against `source`; any failure is logged and replaced with a
/// random fallback quote.
pub fn resolve_quote<R: Rng + ?Sized>(source: &dyn QuoteSource, rng: &mut R) -> String {
    match source.fetch() {
        Ok(quote) => quote,
        Err(err) => {
            warn!(error = %err, "quote fetch failed, using local fallback");
            fallback_quote(rng).to_string()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuoteState {
    text: String,
    loading: bool,
}

impl QuoteState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn refresh<R: Rng + ?Sized>(&mut self, source: &dyn QuoteSource, rng: &mut R) {
        let guard = LoadingGuard::engage(&mut self.loading);
        self.text = resolve_quote(source, rng);
        drop(guard);
    }

    /// [`refresh`](Self::refresh) with the thread-local RNG.
    pub fn refresh_blocking(&mut self, source: &dyn QuoteSource) {
        self.refresh(source, &mut rand::thread_rng());
    }

    fn apply(&mut self, text: String) {
        self.text = text;
        self.loading = false;
    }
}

struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Reply slot owned by a worker. If the worker unwinds before answering, a
/// fallback quote is sent on drop so the loading flag still clears.
struct PendingReply {
    tx: Option<Sender<String>>,
}

impl PendingReply {
    fn send(mut self, text: String) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(text);
        }
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(fallback_quote(&mut rand::thread_rng()).to_string());
        }
    }
}

/// Runs quote fetches off the UI thread. Overlapping requests are not
/// reconciled: whichever finishes last is what stays on screen.
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    pub fn request(&self, state: &mut QuoteState) {
        state.loading = true;
        let source = Arc::clone(&self.source);
        let reply = PendingReply {
            tx: Some(self.tx.clone()),
        };
        let spawned = thread::Builder::new()
            .name("quote-fetch".to_string())
            .spawn(move || {
                let text = resolve_quote(source.as_ref(), &mut rand::thread_rng());
                reply.send(text);
            });
        if let Err(err) = spawned {
            // The closure (and its reply slot) was dropped, so a fallback is
            // already queued.
            warn!(error = %err, "could not start quote worker");
        }
    }

    /// Apply any finished fetches. Returns true if the quote changed.
    pub fn poll(&self, state: &mut QuoteState) -> bool {
        let mut updated = false;
        while let Ok(text) = self.rx.try_recv() {
            state.apply(text);
            updated = true;
        }
        updated
    }
}
