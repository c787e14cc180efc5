//! Runtime - the event/action/render loop
//!
//! Owns the store, the action channel, the task manager and the interval
//! subscriptions. `run` polls the terminal, routes input through the root
//! component, dispatches actions and hands effects to the effect handler
//! until a `Quit` action arrives.

use std::io;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::action::Action;
use crate::components::{Component, Dashboard, DashboardProps};
use crate::effect::Effect;
use crate::event::{process_raw_event, spawn_event_poller, EventKind, PollerConfig, RawEvent};
use crate::state::AppState;
use crate::store::Store;
use crate::subscriptions::Subscriptions;
use crate::tasks::TaskManager;

pub struct Runtime {
    store: Store,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    subscriptions: Subscriptions,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: Store::new(state),
            tasks: TaskManager::new(action_tx.clone()),
            subscriptions: Subscriptions::new(action_tx.clone()),
            action_tx,
            action_rx,
            should_render: true,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn subscriptions(&mut self) -> &mut Subscriptions {
        &mut self.subscriptions
    }

    /// Run the event/action loop until quit.
    pub async fn run<B, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        root: &mut Dashboard,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FEffect: FnMut(Effect, &mut TaskManager),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, PollerConfig::default(), cancel_token.clone());

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    root.render(frame, frame.area(), DashboardProps { state });
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    if matches!(event, EventKind::Resize(..)) {
                        self.should_render = true;
                    }
                    let actions =
                        root.handle_event(&event, DashboardProps { state: self.store.state() });
                    for action in actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if !self.process_action(action, &mut handle_effect) {
                        break;
                    }
                }

                else => break,
            }
        }

        info!("shutting down");
        cancel_token.cancel();
        self.tasks.cancel_all();
        self.subscriptions.cancel_all();
        Ok(())
    }

    /// Dispatch one action and run its effects. Returns `false` on quit.
    fn process_action<FEffect>(&mut self, action: Action, handle_effect: &mut FEffect) -> bool
    where
        FEffect: FnMut(Effect, &mut TaskManager),
    {
        if action == Action::Quit {
            return false;
        }

        let result = self.store.dispatch(action);
        self.should_render |= result.changed;
        for effect in result.effects {
            handle_effect(effect, &mut self.tasks);
        }
        true
    }
}
