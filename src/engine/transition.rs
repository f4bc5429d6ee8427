//! The pure transition function.

use super::error::TransitionError;
use crate::core::{Command, Grid, Guard, Position, RobotState};
use stillwater::validation::Validation;

/// The surface the robot moves on: grid bounds plus any extra guards.
///
/// A position is admitted only if it lies on the grid and every guard
/// accepts it.
#[derive(Debug, Default)]
pub struct Tabletop {
    grid: Grid,
    guards: Vec<Guard<Position>>,
}

impl Tabletop {
    pub fn new(grid: Grid, guards: Vec<Guard<Position>>) -> Self {
        Self { grid, guards }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Check that the robot may stand on `position`.
    pub fn admit(&self, position: Position) -> Result<Position, TransitionError> {
        let position = match self.grid.validate(position) {
            Validation::Success(position) => position,
            Validation::Failure(violations) => {
                return Err(TransitionError::OutOfBounds {
                    position,
                    violations: violations.iter().copied().collect(),
                })
            }
        };

        if self.guards.iter().all(|guard| guard.check(&position)) {
            Ok(position)
        } else {
            Err(TransitionError::GuardBlocked { position })
        }
    }
}

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// State after the command
    pub state: RobotState,
    /// Report line, if the command produced one
    pub output: Option<String>,
}

impl Step {
    fn silent(state: RobotState) -> Self {
        Self {
            state,
            output: None,
        }
    }
}

/// Apply `command` to `state`.
///
/// On error the caller keeps `state` unchanged; no error ever leaves a
/// placed robot off the tabletop.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Command, Facing, RobotState};
/// use toy_robot::engine::{transition, Tabletop};
///
/// let tabletop = Tabletop::default();
/// let state = RobotState::placed(0, 0, Facing::North);
///
/// let step = transition(&state, &Command::Move, &tabletop).unwrap();
/// assert_eq!(step.state, RobotState::placed(0, 1, Facing::North));
///
/// let blocked = RobotState::placed(0, 0, Facing::South);
/// assert!(transition(&blocked, &Command::Move, &tabletop).is_err());
/// ```
pub fn transition(
    state: &RobotState,
    command: &Command,
    tabletop: &Tabletop,
) -> Result<Step, TransitionError> {
    match (*state, *command) {
        (_, Command::Place { position, facing }) => {
            let position = tabletop.admit(position)?;
            Ok(Step::silent(RobotState::Placed { position, facing }))
        }
        (RobotState::Unplaced, command) => Err(TransitionError::NotPlaced {
            command: command.keyword(),
        }),
        (RobotState::Placed { position, facing }, Command::Move) => {
            let Some(target) = position.step(facing) else {
                return Err(TransitionError::OutOfBounds {
                    position,
                    violations: Vec::new(),
                });
            };
            let position = tabletop.admit(target)?;
            Ok(Step::silent(RobotState::Placed { position, facing }))
        }
        (RobotState::Placed { position, facing }, Command::Left) => {
            Ok(Step::silent(RobotState::Placed {
                position,
                facing: facing.rotate_left(),
            }))
        }
        (RobotState::Placed { position, facing }, Command::Right) => {
            Ok(Step::silent(RobotState::Placed {
                position,
                facing: facing.rotate_right(),
            }))
        }
        (RobotState::Placed { .. }, Command::Report) => Ok(Step {
            state: *state,
            output: state.report(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoundsViolation, Facing};

    fn placed(x: i32, y: i32, facing: Facing) -> RobotState {
        RobotState::placed(x, y, facing)
    }

    #[test]
    fn place_on_grid_from_any_state() {
        let tabletop = Tabletop::default();
        for state in [RobotState::Unplaced, placed(4, 4, Facing::West)] {
            let step = transition(&state, &Command::place(1, 3, Facing::South), &tabletop).unwrap();
            assert_eq!(step.state, placed(1, 3, Facing::South));
            assert_eq!(step.output, None);
        }
    }

    #[test]
    fn place_off_grid_is_rejected_with_violations() {
        let tabletop = Tabletop::default();
        let result = transition(
            &RobotState::Unplaced,
            &Command::place(5, -1, Facing::North),
            &tabletop,
        );

        assert_eq!(
            result,
            Err(TransitionError::OutOfBounds {
                position: Position::new(5, -1),
                violations: vec![
                    BoundsViolation::X { value: 5, max: 4 },
                    BoundsViolation::Y { value: -1, max: 4 },
                ],
            })
        );
    }

    #[test]
    fn unplaced_rejects_everything_but_place() {
        let tabletop = Tabletop::default();
        for command in [Command::Move, Command::Left, Command::Right, Command::Report] {
            let result = transition(&RobotState::Unplaced, &command, &tabletop);
            assert_eq!(
                result,
                Err(TransitionError::NotPlaced {
                    command: command.keyword()
                })
            );
        }
    }

    #[test]
    fn move_follows_facing() {
        let tabletop = Tabletop::default();
        let cases = [
            (Facing::North, (2, 3)),
            (Facing::East, (3, 2)),
            (Facing::South, (2, 1)),
            (Facing::West, (1, 2)),
        ];
        for (facing, (x, y)) in cases {
            let step = transition(&placed(2, 2, facing), &Command::Move, &tabletop).unwrap();
            assert_eq!(step.state, placed(x, y, facing));
        }
    }

    #[test]
    fn move_off_each_edge_is_rejected() {
        let tabletop = Tabletop::default();
        let edges = [
            placed(2, 4, Facing::North),
            placed(4, 2, Facing::East),
            placed(2, 0, Facing::South),
            placed(0, 2, Facing::West),
        ];
        for state in edges {
            let result = transition(&state, &Command::Move, &tabletop);
            assert!(matches!(result, Err(TransitionError::OutOfBounds { .. })));
        }
    }

    #[test]
    fn rotation_keeps_position() {
        let tabletop = Tabletop::default();
        let state = placed(3, 1, Facing::North);

        let left = transition(&state, &Command::Left, &tabletop).unwrap();
        assert_eq!(left.state, placed(3, 1, Facing::West));

        let right = transition(&state, &Command::Right, &tabletop).unwrap();
        assert_eq!(right.state, placed(3, 1, Facing::East));
    }

    #[test]
    fn report_outputs_without_changing_state() {
        let tabletop = Tabletop::default();
        let state = placed(0, 0, Facing::North);

        let step = transition(&state, &Command::Report, &tabletop).unwrap();
        assert_eq!(step.state, state);
        assert_eq!(step.output.as_deref(), Some("0,0,NORTH"));
    }

    #[test]
    fn guard_blocks_place_and_move() {
        let blocked = Position::new(1, 1);
        let tabletop = Tabletop::new(
            Grid::default(),
            vec![Guard::new(move |p: &Position| *p != blocked)],
        );

        let place = transition(
            &RobotState::Unplaced,
            &Command::place(1, 1, Facing::North),
            &tabletop,
        );
        assert_eq!(place, Err(TransitionError::GuardBlocked { position: blocked }));

        let step = transition(&placed(1, 0, Facing::North), &Command::Move, &tabletop);
        assert_eq!(step, Err(TransitionError::GuardBlocked { position: blocked }));
    }

    #[test]
    fn larger_grid_extends_bounds() {
        let tabletop = Tabletop::new(Grid::new(10, 10).unwrap(), Vec::new());
        let step = transition(&placed(4, 4, Facing::North), &Command::Move, &tabletop).unwrap();
        assert_eq!(step.state, placed(4, 5, Facing::North));
    }
}
