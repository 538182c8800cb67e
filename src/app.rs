//! Interactive app state: the seed prompt, one session with its placement prompt,
//! and the end-of-game report.
//!
//! Pure state and rendering; the binary feeds it key actions and draws its frames.

use tracing::{info, warn};

use crate::core::{FinalReport, GameSession, Phase, PlaceError, SessionError};
use crate::input::{InputHandler, SeedInput};
use crate::term::{FrameBuffer, GameView, PromptView, Viewport};
use crate::types::{LineSet, PlayerAction};

pub const MSG_INVALID: &str = "Invalid position, try again";
pub const MSG_FILLED: &str = "Position filled, try again";
pub const MSG_NOT_REPLAYABLE: &str = "This seed starts with a 10 and cannot be replayed";

pub struct App {
    session: GameSession,
    input: InputHandler,
    seed_input: SeedInput,
    /// The seed prompt is showing; `session` is not drawn until a seed is accepted.
    entering_seed: bool,
    line_set: LineSet,
    message: Option<String>,
    report: Option<FinalReport>,
}

impl App {
    /// Start playing `session` right away.
    pub fn new(session: GameSession) -> Result<Self, SessionError> {
        let mut app = Self {
            line_set: session.line_set(),
            session,
            input: InputHandler::new(),
            seed_input: SeedInput::new(),
            entering_seed: false,
            message: None,
            report: None,
        };
        app.settle()?;
        Ok(app)
    }

    /// Open on the seed prompt.
    pub fn with_seed_prompt(line_set: LineSet) -> Self {
        Self {
            line_set,
            session: GameSession::fresh(line_set),
            input: InputHandler::new(),
            seed_input: SeedInput::new(),
            entering_seed: true,
            message: None,
            report: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn report(&self) -> Option<&FinalReport> {
        self.report.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn typed(&self) -> &str {
        if self.entering_seed {
            self.seed_input.typed()
        } else {
            self.input.typed()
        }
    }

    pub fn entering_seed(&self) -> bool {
        self.entering_seed
    }

    fn say(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Draw the next card, or collect the report once the game is over.
    fn settle(&mut self) -> Result<(), SessionError> {
        if self.session.advance()? == Phase::GameOver && self.report.is_none() {
            self.report = self.session.report();
        }
        Ok(())
    }

    fn restart(&mut self, session: GameSession) -> Result<(), SessionError> {
        self.session = session;
        self.entering_seed = false;
        self.input.reset();
        self.message = None;
        self.report = None;
        self.settle()
    }

    fn begin_seed_entry(&mut self) {
        self.entering_seed = true;
        self.seed_input.reset();
        self.message = None;
    }

    /// Apply one player action.
    ///
    /// Rejected positions and seeds only set a message; errors are internal failures.
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), SessionError> {
        if self.entering_seed {
            return self.apply_seed_entry(action);
        }

        match action {
            PlayerAction::NewGame => {
                info!("new game requested");
                self.begin_seed_entry();
                Ok(())
            }
            PlayerAction::Replay if self.report.is_some() => self.replay(),
            _ if self.report.is_some() => Ok(()),
            _ => match self.input.handle(action) {
                Some(Ok(location)) => self.place(location.index()),
                Some(Err(_)) => {
                    self.say(MSG_INVALID);
                    Ok(())
                }
                None => Ok(()),
            },
        }
    }

    fn apply_seed_entry(&mut self, action: PlayerAction) -> Result<(), SessionError> {
        let Some(text) = self.seed_input.handle(action) else {
            return Ok(());
        };
        let token = text.trim();
        if token.is_empty() {
            info!("no seed entered, shuffling a fresh deck");
            return self.restart(GameSession::fresh(self.line_set));
        }

        match GameSession::from_seed(token, self.line_set) {
            Ok(session) => {
                info!(seed = token, "starting from entered seed");
                self.restart(session)
            }
            Err(err) => {
                warn!(seed = token, error = %err, "seed rejected");
                self.say(err.to_string());
                Ok(())
            }
        }
    }

    fn replay(&mut self) -> Result<(), SessionError> {
        let deck = self.session.deck();
        if !deck.seed_replayable() {
            self.say(MSG_NOT_REPLAYABLE);
            return Ok(());
        }
        let seed = deck.seed();
        info!(%seed, "replaying seed");
        match GameSession::from_seed(&seed, self.line_set) {
            Ok(session) => self.restart(session),
            Err(_) => {
                self.say(MSG_NOT_REPLAYABLE);
                Ok(())
            }
        }
    }

    fn place(&mut self, index: usize) -> Result<(), SessionError> {
        match self.session.place(index) {
            Ok(_) => {
                self.message = None;
                self.settle()
            }
            Err(SessionError::Place(PlaceError::Occupied(_))) => {
                self.say(MSG_FILLED);
                Ok(())
            }
            Err(err) if err.is_retryable() => {
                self.say(MSG_INVALID);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn render_into(&self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        if self.entering_seed {
            let prompt = PromptView {
                typed: self.seed_input.typed(),
                cursor: None,
                message: self.message(),
            };
            view.render_seed_entry_into(&prompt, self.line_set, viewport, fb);
            return;
        }

        match &self.report {
            Some(report) => view.render_report_into(report, viewport, fb),
            None => {
                let prompt = PromptView {
                    typed: self.input.typed(),
                    cursor: Some(self.input.cursor()),
                    message: self.message(),
                };
                view.render_play_into(&self.session.snapshot(), &prompt, viewport, fb);
            }
        }
    }
}
