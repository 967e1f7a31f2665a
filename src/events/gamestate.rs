//! Applying state transitions.
//!
//! A [`GameStateChangedEvent`] moves a pending [`NextGameState`] into
//! [`GameState`] and queues the enter hooks of the new state, looked up by
//! name in [`SystemsStore`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::systemsstore::SystemsStore;

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    next_state: Option<ResMut<NextGameState>>,
    game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    let (Some(mut next_state), Some(mut game_state)) = (next_state, game_state) else {
        warn!("Game state resources missing, transition ignored");
        return;
    };
    let NextGameStates::Pending(new_state) = next_state.get().clone() else {
        debug!("No state change pending");
        return;
    };

    info!("Game state {:?} -> {:?}", game_state.get(), new_state);
    game_state.set(new_state.clone());
    next_state.reset();

    for hook in enter_hooks(&new_state) {
        match systems_store.get(hook) {
            Some(id) => commands.run_system(*id),
            None => warn!("State hook '{}' not found in SystemsStore", hook),
        }
    }
}

/// Names of the registered systems run when entering `state`, in order.
pub fn enter_hooks(state: &GameStates) -> &'static [&'static str] {
    match state {
        GameStates::None => &[],
        GameStates::Setup => &["setup"],
        GameStates::Playing => &["enter_play", "bind_touch_controls"],
        GameStates::Won => &["enter_won"],
        GameStates::Quitting => &["quit_game"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Entered(Vec<&'static str>);

    fn hook_a(mut entered: ResMut<Entered>) {
        entered.0.push("enter_play");
    }

    fn hook_b(mut entered: ResMut<Entered>) {
        entered.0.push("bind_touch_controls");
    }

    #[test]
    fn test_pending_state_applied_and_hooks_run_in_order() {
        let mut world = World::new();
        world.init_resource::<Entered>();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        let mut store = SystemsStore::new();
        store.insert("enter_play", world.register_system(hook_a));
        store.insert("bind_touch_controls", world.register_system(hook_b));
        world.insert_resource(store);
        world.add_observer(observe_gamestate_change_event);
        world.flush();

        world.resource_mut::<NextGameState>().set(GameStates::Playing);
        world.trigger(GameStateChangedEvent {});
        world.flush();

        assert_eq!(*world.resource::<GameState>().get(), GameStates::Playing);
        assert_eq!(
            *world.resource::<NextGameState>().get(),
            NextGameStates::Unchanged
        );
        assert_eq!(
            world.resource::<Entered>().0,
            vec!["enter_play", "bind_touch_controls"]
        );
    }

    #[test]
    fn test_unchanged_does_nothing() {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(SystemsStore::new());
        world.add_observer(observe_gamestate_change_event);
        world.flush();

        world.trigger(GameStateChangedEvent {});
        assert_eq!(*world.resource::<GameState>().get(), GameStates::None);
    }

    #[test]
    fn test_missing_hook_is_skipped() {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(SystemsStore::new());
        world.add_observer(observe_gamestate_change_event);
        world.flush();

        world.resource_mut::<NextGameState>().set(GameStates::Won);
        world.trigger(GameStateChangedEvent {});
        world.flush();
        assert_eq!(*world.resource::<GameState>().get(), GameStates::Won);
    }
}
