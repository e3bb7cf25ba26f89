//! Event loop driving navigation input and rendering.
//!
//! The loop owns the tree, the two host collaborators and the app state.
//! Each frame it polls for input, forwards navigation commands to the
//! focused node and re-renders on change. The initial highlight refresh
//! scheduled by `initialize_as_root` fires on the first tick, once the
//! terminal is guaranteed ready.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use menu_core::{BattleUi, MenuTree, NavCommand, NavOutcome};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    config::CliConfig,
    demo::ActionBindings,
    host::{LabelStore, PanelHost},
    input::{InputHandler, KeyAction},
    state::AppState,
    terminal::Tui,
    ui::{self, RenderContext},
};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    tree: MenuTree,
    panel: PanelHost,
    labels: LabelStore,
    input: InputHandler,
    app_state: AppState,
    actions: ActionBindings,
    config: CliConfig,
}

impl EventLoop {
    pub fn new(tree: MenuTree, actions: ActionBindings, config: CliConfig) -> Self {
        let root = tree.root();
        Self {
            tree,
            panel: PanelHost::new(),
            labels: LabelStore::new(),
            input: InputHandler::new(),
            app_state: AppState::new(root),
            actions,
            config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.tree.initialize_as_root(&mut self.labels);
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            if self.tree.fire_deferred_refresh(&mut self.panel) {
                self.render(terminal)?;
            }
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(())
    }

    /// Poll for keyboard input; returns true when the session should end.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("leaving battle menu");
                Ok(true)
            }
            KeyAction::Nav(command) => {
                self.dispatch(command);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    /// Forward one navigation command to the focused node and resolve the
    /// outcome: focus moves, or a battle action fires.
    fn dispatch(&mut self, command: NavCommand) {
        let focused = self.app_state.focused;
        let outcome = self
            .tree
            .apply(focused, command, &mut self.panel, &mut self.labels);

        match outcome {
            NavOutcome::Descend(child) => {
                if self.tree.child_count(child) == 0 {
                    // Terminal entry: fire its action, then hand focus
                    // straight back so the player stays on this panel.
                    let message = self.actions.terminal_message(self.tree.label(child));
                    self.app_state.set_status(message);
                    if let Some(parent) = self.tree.back(child, &mut self.panel, &mut self.labels)
                    {
                        self.app_state.focus(parent);
                    }
                } else {
                    self.app_state.focus(child);
                }
            }
            NavOutcome::Ascend(parent) => {
                self.app_state.focus(parent);
            }
            NavOutcome::LeafAction { slot } => {
                // The depth signal anticipated a descent that never came;
                // pop it again and put the highlight back on the cursor.
                if self.tree.increases_depth(focused) {
                    self.panel.decrease_depth();
                }
                self.panel.refresh_highlight(self.tree.cursor(focused));
                let message = self.actions.empty_slot_message(focused, slot).to_string();
                self.app_state.set_status(message);
            }
            NavOutcome::Stay => {}
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                tree: &self.tree,
                panel: &self.panel,
                labels: &self.labels,
                app_state: &self.app_state,
                ui_config: &self.config.ui,
            },
        )
    }
}
