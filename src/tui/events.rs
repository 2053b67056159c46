use crate::corpus::Record;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic tick; drives the search debounce window.
    Tick,
    /// Raw terminal input (keyboard/mouse/resize).
    Input(crossterm::event::Event),
    /// Corpus fetch + normalize completed.
    CorpusLoaded(Vec<Record>),
    /// Corpus load failed; the message replaces the entry list.
    LoadFailed(String),
}
