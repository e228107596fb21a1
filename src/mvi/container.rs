//! Screen-scoped container: state stream + side-effect stream + dispatch.

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use super::reducer::Reducer;

/// Owns a screen's state and drives its reducer.
///
/// The container exposes two streams:
///
/// - **State** via [`Container::watch_state`]: a latest-value channel.
///   New subscribers immediately observe the current state; every
///   dispatch replaces it (last-value-wins).
/// - **Side effects** via [`Container::subscribe_side_effects`]: a
///   fire-once channel. Effects emitted while nobody is subscribed are
///   dropped, and a new subscription replaces the previous one, so an
///   effect is delivered at most once and never replayed on
///   re-subscription (e.g. after a view re-render).
///
/// Dispatch is serialized: intents for one screen are applied strictly
/// one at a time, in dispatch order. The container lives as long as the
/// screen; dropping it closes both streams. Adapter results that would
/// arrive after teardown die with the caller's cancelled future and are
/// never applied to a stale reducer.
pub struct Container<R: Reducer> {
    dispatch_lock: Mutex<()>,
    state_tx: watch::Sender<R::State>,
    effect_tx: Mutex<Option<mpsc::UnboundedSender<R::Effect>>>,
}

impl<R: Reducer> Container<R> {
    /// Create a container holding `initial` state, with no side-effect
    /// subscriber yet.
    pub fn new(initial: R::State) -> Self {
        let (state_tx, _) = watch::channel(initial);
        Self {
            dispatch_lock: Mutex::new(()),
            state_tx,
            effect_tx: Mutex::new(None),
        }
    }

    /// Apply `intent` through the reducer, publish the new state, and
    /// deliver the side effect (if any) to the current subscriber.
    pub fn dispatch(&self, intent: R::Intent) {
        let _serialized = self.dispatch_lock.lock();

        let mut emitted = None;
        self.state_tx.send_modify(|state| {
            let transition = R::reduce(state.clone(), intent);
            *state = transition.state;
            emitted = transition.effect;
        });

        if let Some(effect) = emitted {
            self.emit(effect);
        }
    }

    /// Clone of the current state.
    pub fn state(&self) -> R::State {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes. The receiver starts at the current
    /// state and observes every subsequent replacement.
    pub fn watch_state(&self) -> watch::Receiver<R::State> {
        self.state_tx.subscribe()
    }

    /// Subscribe to side effects emitted from now on.
    ///
    /// Replaces any previous subscription: the old receiver stops
    /// getting effects. Effects emitted before the first subscription
    /// are dropped, not buffered.
    pub fn subscribe_side_effects(&self) -> mpsc::UnboundedReceiver<R::Effect> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.effect_tx.lock() = Some(tx);
        rx
    }

    fn emit(&self, effect: R::Effect) {
        let guard = self.effect_tx.lock();
        match guard.as_ref() {
            Some(tx) => {
                if tx.send(effect).is_err() {
                    tracing::debug!("side effect dropped: subscriber went away");
                }
            }
            None => tracing::debug!("side effect dropped: no subscriber"),
        }
    }
}

impl<R: Reducer> Default for Container<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::{Intent, SideEffect, Transition, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct CounterState {
        count: u32,
    }

    impl UiState for CounterState {}

    enum CounterIntent {
        Add(u32),
        Overflowing,
    }

    impl Intent for CounterIntent {}

    #[derive(Debug, Clone, PartialEq)]
    enum CounterEffect {
        Overflowed,
    }

    impl SideEffect for CounterEffect {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Intent = CounterIntent;
        type Effect = CounterEffect;

        fn reduce(
            state: Self::State,
            intent: Self::Intent,
        ) -> Transition<Self::State, Self::Effect> {
            match intent {
                CounterIntent::Add(n) => Transition::next(CounterState {
                    count: state.count + n,
                }),
                CounterIntent::Overflowing => {
                    Transition::with_effect(state, CounterEffect::Overflowed)
                }
            }
        }
    }

    #[test]
    fn dispatch_replaces_state() {
        let container = Container::<CounterReducer>::default();
        container.dispatch(CounterIntent::Add(2));
        container.dispatch(CounterIntent::Add(3));
        assert_eq!(container.state(), CounterState { count: 5 });
    }

    #[test]
    fn late_state_subscriber_sees_latest_value() {
        let container = Container::<CounterReducer>::default();
        container.dispatch(CounterIntent::Add(7));

        let rx = container.watch_state();
        assert_eq!(rx.borrow().count, 7);
    }

    #[test]
    fn effects_before_subscription_are_dropped() {
        let container = Container::<CounterReducer>::default();
        container.dispatch(CounterIntent::Overflowing);

        let mut effects = container.subscribe_side_effects();
        assert!(effects.try_recv().is_err());
    }

    #[test]
    fn effect_is_delivered_exactly_once() {
        let container = Container::<CounterReducer>::default();
        let mut effects = container.subscribe_side_effects();

        container.dispatch(CounterIntent::Overflowing);

        assert_eq!(effects.try_recv(), Ok(CounterEffect::Overflowed));
        assert!(effects.try_recv().is_err());
    }

    #[test]
    fn resubscription_replaces_previous_receiver() {
        let container = Container::<CounterReducer>::default();
        let mut first = container.subscribe_side_effects();
        let mut second = container.subscribe_side_effects();

        container.dispatch(CounterIntent::Overflowing);

        assert!(first.try_recv().is_err());
        assert_eq!(second.try_recv(), Ok(CounterEffect::Overflowed));
    }

    #[test]
    fn effect_does_not_disturb_state() {
        let container = Container::<CounterReducer>::default();
        container.dispatch(CounterIntent::Add(4));
        container.dispatch(CounterIntent::Overflowing);
        assert_eq!(container.state().count, 4);
    }
}
