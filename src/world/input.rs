//! Player input: terminal events become UI-agnostic actions, and actions
//! drive the phase machine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{Phase, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Thrust,
    /// Start over, whatever the phase.
    Restart,
    /// Dismiss the game-over screen.
    Confirm,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                Some(Action::Thrust)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    /// A left-button press is the terminal's closest thing to a touch start.
    pub fn from_mouse(mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Thrust),
            _ => None,
        }
    }
}

impl World {
    /// Fire the engine. The first thrust also starts the run.
    pub fn thrust(&mut self) {
        match self.phase {
            Phase::GameOver => return,
            Phase::NotStarted => {
                log::info!("run started");
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
        self.rocket.dy = self.config.physics.thrust;
    }

    pub fn restart(&mut self) {
        log::info!("restarting after {} ticks", self.ticks);
        self.reset();
    }

    /// Apply a gameplay action. `Quit` is the caller's business.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Thrust => self.thrust(),
            Action::Restart => self.restart(),
            Action::Confirm => {
                if self.phase == Phase::GameOver {
                    self.restart();
                }
            }
            Action::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_world, GameOverCause};
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(key(KeyCode::Char(' '))), Some(Action::Thrust));
        assert_eq!(Action::from_key(key(KeyCode::Up)), Some(Action::Thrust));
        assert_eq!(Action::from_key(key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(Action::from_key(key(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(Action::from_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(Action::from_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(Action::from_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_mouse_press_is_thrust() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(Action::from_mouse(press), Some(Action::Thrust));

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..press
        };
        assert_eq!(Action::from_mouse(moved), None);
    }

    #[test]
    fn test_first_thrust_starts_run() {
        let mut world = test_world();
        assert_eq!(world.phase, Phase::NotStarted);
        world.thrust();
        assert_eq!(world.phase, Phase::Running);
        assert_eq!(world.rocket.dy, -10.0);
    }

    #[test]
    fn test_thrust_resets_velocity_not_adds() {
        let mut world = test_world();
        world.thrust();
        world.rocket.dy = 7.0;
        world.thrust();
        assert_eq!(world.rocket.dy, -10.0);
    }

    #[test]
    fn test_thrust_ignored_after_game_over() {
        let mut world = test_world();
        world.thrust();
        world.end(GameOverCause::Floor);
        world.rocket.dy = 0.0;
        world.thrust();
        assert_eq!(world.rocket.dy, 0.0);
        assert_eq!(world.phase, Phase::GameOver);
    }

    #[test]
    fn test_enter_restarts_only_when_over() {
        let mut world = test_world();
        world.thrust();
        world.update();
        let ticks = world.ticks;
        world.apply(Action::Confirm);
        assert_eq!(world.ticks, ticks);
        assert_eq!(world.phase, Phase::Running);

        world.end(GameOverCause::Ceiling);
        world.apply(Action::Confirm);
        assert_eq!(world.phase, Phase::NotStarted);
        assert_eq!(world.ticks, 0);
    }

    #[test]
    fn test_r_restarts_mid_run() {
        let mut world = test_world();
        world.thrust();
        world.update();
        world.apply(Action::Restart);
        assert_eq!(world.phase, Phase::NotStarted);
        assert_eq!(world.rocket.y, 300.0);
    }
}
