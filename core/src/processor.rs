use crate::*;

/// Valid transitions:
/// - AwaitingMove -> AwaitingMove
/// - AwaitingMove -> PlayerDied
/// - AwaitingMove -> PlayerWon
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove,
    /// No lives left
    PlayerDied,
    /// Player reached the top row
    PlayerWon,
}

impl TurnState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        use TurnState::*;
        match self {
            AwaitingMove => false,
            PlayerDied => true,
            PlayerWon => true,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::AwaitingMove
    }
}

/// What happened during a single resolved turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Turn {
    pub outcome: MoveOutcome,
    /// The move set off a mine and cost a life.
    pub hit: bool,
    pub state: TurnState,
}

/// Moves the player and applies the consequences: a life lost on a hit, then death, then
/// reaching the top row.
pub fn resolve_turn(board: &mut Board, player: &mut Player, direction: Direction) -> Turn {
    let outcome = board.move_player(direction);

    // only a move can hurt, a blocked move leaves the player where it was hit already
    let hit = outcome.has_update() && board.is_player_hit();
    if hit {
        player.lose_life();
    }

    let state = if !player.is_alive() {
        TurnState::PlayerDied
    } else if board.is_cell_in_top_row(board.player_position()) {
        TurnState::PlayerWon
    } else {
        TurnState::AwaitingMove
    };

    Turn {
        outcome,
        hit,
        state,
    }
}

pub trait BoardFactory {
    fn create_board(&mut self) -> Board;
}

impl<F: FnMut() -> Board> BoardFactory for F {
    fn create_board(&mut self) -> Board {
        self()
    }
}

/// Random boards, reproducible when a seed is given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomBoardFactory {
    seed: Option<u64>,
}

impl RandomBoardFactory {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// The first board uses `seed`, every following board the next seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl BoardFactory for RandomBoardFactory {
    fn create_board(&mut self) -> Board {
        match self.seed {
            Some(seed) => {
                self.seed = Some(seed.wrapping_add(1));
                Board::with_seed(seed)
            }
            None => Board::new(),
        }
    }
}

pub trait PlayerFactory {
    fn create_player(&self) -> Player;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DefaultPlayerFactory {
    lives: i32,
}

impl DefaultPlayerFactory {
    pub fn new(lives: i32) -> Self {
        Self { lives }
    }
}

impl Default for DefaultPlayerFactory {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}

impl PlayerFactory for DefaultPlayerFactory {
    fn create_player(&self) -> Player {
        let mut player = Player::new();
        player.set_lives(self.lives);
        player
    }
}

/// Runs games against a user interface until the user stops asking for another one.
pub struct GameProcessor<'a> {
    ui: &'a mut dyn UserInterface,
    boards: &'a mut dyn BoardFactory,
    players: &'a dyn PlayerFactory,
}

impl<'a> GameProcessor<'a> {
    pub fn new(
        ui: &'a mut dyn UserInterface,
        boards: &'a mut dyn BoardFactory,
        players: &'a dyn PlayerFactory,
    ) -> Self {
        Self {
            ui,
            boards,
            players,
        }
    }

    /// Plays sessions back to back, each on a fresh board with a fresh player.
    pub fn start_game(&mut self) -> Result<()> {
        let mut sessions = 0;
        loop {
            let state = self.play_session()?;
            sessions += 1;
            log::info!("Session {} ended: {:?}", sessions, state);

            let answer = self.ui.ask_to_play_again()?;
            if !parse_play_again(&answer) {
                break;
            }
        }
        self.ui.render_message("Thanks for playing Shuffle!")?;
        Ok(())
    }

    /// One game from greeting to a final state.
    pub fn play_session(&mut self) -> Result<TurnState> {
        let mut board = self.boards.create_board();
        let mut player = self.players.create_player();
        let name = self.ui.ask_for_player_name()?;
        player.set_name(&name);
        log::info!("New player {} with {} lives", player.name(), player.lives());

        self.ui.clear_screen()?;
        self.ui.render_message(&format!("Welcome {} to Shuffle!", player.name()))?;
        self.ui.render_message(concat!(
            "Move your piece to the top of the board to win. ",
            "Watch out for mines, hit two and its GAME OVER!"
        ))?;
        self.ui.new_line()?;
        self.ui.draw_board(&board)?;
        self.ui.new_line()?;
        self.ui.render_message("Ready Player One.")?;

        log::info!("Turns started");
        self.take_turns(&mut board, &mut player)
    }

    /// Asks for moves until the game reaches a final state.
    pub fn take_turns(&mut self, board: &mut Board, player: &mut Player) -> Result<TurnState> {
        loop {
            let requested = self.ui.ask_for_move()?;
            let direction = Direction::parse(&requested);
            if !direction.is_valid() {
                log::debug!("Invalid move requested: {:?}", requested);
                self.ui.render_message(&format!(
                    "{} is not a valid move ('U','D','L', or 'R'). Please try again.",
                    requested.trim()
                ))?;
                continue;
            }

            self.ui.clear_screen()?;
            let turn = resolve_turn(board, player, direction);
            log::info!("Player took a turn: {:?}", turn);

            self.ui.render_message(&turn.outcome.to_string())?;
            if turn.hit {
                self.ui.render_message("BOOM! You stepped on a mine.")?;
            }
            self.ui.draw_board(board)?;
            self.ui.new_line()?;

            match turn.state {
                TurnState::AwaitingMove => {
                    self.ui.render_message(&format!("Lives left: {}", player.lives()))?;
                }
                TurnState::PlayerDied => {
                    log::info!("Player {} died, ending turns", player.name());
                    self.ui.render_message(&format!(
                        "{} you have no lives left! Game Over Man, Game Over.",
                        player.name()
                    ))?;
                    return Ok(turn.state);
                }
                TurnState::PlayerWon => {
                    log::info!("Player {} reached the top row", player.name());
                    self.ui.render_message(&format!(
                        "Well done {}, you made it to the top!",
                        player.name()
                    ))?;
                    return Ok(turn.state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    #[derive(Default)]
    struct ScriptedUi {
        input: VecDeque<String>,
        messages: Vec<String>,
        boards_drawn: usize,
        last_board: Option<Board>,
    }

    impl ScriptedUi {
        fn new(input: &[&str]) -> Self {
            Self {
                input: input.iter().map(|line| line.to_string()).collect(),
                ..Default::default()
            }
        }

        fn said(&self, text: &str) -> bool {
            self.messages.iter().any(|message| message.contains(text))
        }
    }

    impl UserInterface for ScriptedUi {
        fn read_line(&mut self) -> io::Result<String> {
            self.input
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }

        fn render_message(&mut self, message: &str) -> io::Result<()> {
            self.messages.push(message.to_owned());
            Ok(())
        }

        fn new_line(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn clear_screen(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn draw_board(&mut self, board: &Board) -> io::Result<()> {
            self.boards_drawn += 1;
            self.last_board = Some(board.clone());
            Ok(())
        }
    }

    fn pos(row: Coord, col: Coord) -> Position {
        Position::new(row, col)
    }

    fn run(ui: &mut ScriptedUi, mines: &[Position]) -> Result<()> {
        let mines = mines.to_vec();
        let mut boards = move || Board::with_generator(mines.clone());
        let players = DefaultPlayerFactory::default();
        GameProcessor::new(ui, &mut boards, &players).start_game()
    }

    #[test]
    fn resolve_turn_on_mine_costs_a_life() {
        let mut board = Board::with_generator([pos(6, 0)]);
        let mut player = Player::new();

        let turn = resolve_turn(&mut board, &mut player, Direction::Up);

        assert!(turn.hit);
        assert_eq!(turn.state, TurnState::AwaitingMove);
        assert_eq!(player.lives(), 1);
        assert_eq!(board.cell_status(pos(6, 0)), CellStatus::PlayerIsHit);
    }

    #[test]
    fn resolve_turn_blocked_on_hit_cell_costs_nothing() {
        let mut board = Board::with_generator([pos(6, 0)]);
        let mut player = Player::new();
        resolve_turn(&mut board, &mut player, Direction::Up);

        let turn = resolve_turn(&mut board, &mut player, Direction::Left);

        assert_eq!(turn.outcome, MoveOutcome::Blocked(Direction::Left));
        assert!(!turn.hit);
        assert_eq!(player.lives(), 1);
    }

    #[test]
    fn resolve_turn_back_onto_spent_mine_costs_another_life() {
        let mut board = Board::with_generator([pos(6, 0)]);
        let mut player = Player::new();
        player.set_lives(3);
        resolve_turn(&mut board, &mut player, Direction::Up);

        let off = resolve_turn(&mut board, &mut player, Direction::Right);
        assert!(!off.hit);
        assert_eq!(board.cell_status(pos(6, 0)), CellStatus::Mine);

        let back = resolve_turn(&mut board, &mut player, Direction::Left);

        assert_eq!(back.outcome, MoveOutcome::Moved(Direction::Left));
        assert!(back.hit);
        assert_eq!(back.state, TurnState::AwaitingMove);
        assert_eq!(player.lives(), 1);
        assert_eq!(board.cell_status(pos(6, 0)), CellStatus::PlayerIsHit);
    }

    #[test]
    fn resolve_turn_last_life_ends_game() {
        let mut board = Board::with_generator([pos(6, 0)]);
        let mut player = Player::new();
        player.set_lives(1);

        let turn = resolve_turn(&mut board, &mut player, Direction::Up);

        assert_eq!(turn.state, TurnState::PlayerDied);
        assert!(turn.state.is_final());
    }

    #[test]
    fn resolve_turn_top_row_wins() {
        let mut board = Board::empty();
        board.set_player_position(pos(1, 3));
        let mut player = Player::new();

        let turn = resolve_turn(&mut board, &mut player, Direction::Up);

        assert_eq!(turn.state, TurnState::PlayerWon);
    }

    #[test]
    fn death_wins_over_top_row() {
        let mut board = Board::with_generator([pos(0, 3)]);
        board.set_player_position(pos(1, 3));
        let mut player = Player::new();
        player.set_lives(1);

        let turn = resolve_turn(&mut board, &mut player, Direction::Up);

        assert_eq!(turn.state, TurnState::PlayerDied);
    }

    #[test]
    fn walking_to_the_top_wins() {
        let mut ui = ScriptedUi::new(&["Ann", "U", "U", "U", "U", "U", "U", "U", "n"]);

        run(&mut ui, &[]).unwrap();

        assert!(ui.said("Welcome Ann to Shuffle!"));
        assert!(ui.said("Well done Ann"));
        assert!(ui.said("Thanks for playing"));
        assert_eq!(ui.boards_drawn, 8);
        assert_eq!(ui.last_board.unwrap().player_position(), pos(0, 0));
        assert!(ui.input.is_empty());
    }

    #[test]
    fn two_mines_end_the_game() {
        let mut ui = ScriptedUi::new(&["", "u", "u", "N"]);

        run(&mut ui, &[pos(6, 0), pos(5, 0)]).unwrap();

        assert!(ui.said("BOOM!"));
        assert!(ui.said("Lives left: 1"));
        assert!(ui.said("Player One you have no lives left!"));
        assert!(!ui.said("Well done"));
        let board = ui.last_board.unwrap();
        assert_eq!(board.cell_status(pos(6, 0)), CellStatus::Mine);
        assert_eq!(board.cell_status(pos(5, 0)), CellStatus::PlayerIsHit);
    }

    #[test]
    fn invalid_moves_are_reprompted_without_drawing() {
        let mut ui = ScriptedUi::new(&["Ann", "x", "up", "R", "L", "q"]);
        let mut board = Board::empty();
        let mut player = Player::new();

        let result = GameProcessor::new(
            &mut ui,
            &mut RandomBoardFactory::new(),
            &DefaultPlayerFactory::default(),
        )
        .take_turns(&mut board, &mut player);

        // the script runs dry while the game is still going
        assert!(matches!(result, Err(GameError::Io(_))));
        assert!(ui.said("x is not a valid move ('U','D','L', or 'R'). Please try again."));
        assert!(ui.said("up is not a valid move"));
        assert!(ui.said("Ann is not a valid move"));
        assert!(ui.said("q is not a valid move"));
        assert_eq!(ui.boards_drawn, 2);
        assert_eq!(board.player_position(), pos(7, 0));
    }

    #[test]
    fn blocked_move_is_reported() {
        let mut ui = ScriptedUi::new(&["Ann", "L", "D"]);

        let result = run(&mut ui, &[]);

        assert!(result.is_err());
        assert!(ui.said("You can't move left, try again."));
        assert!(ui.said("You can't move down, try again."));
    }

    #[test]
    fn play_again_builds_a_fresh_board() {
        let mut created = 0;
        let mut boards = || {
            created += 1;
            Board::empty()
        };
        let mut ui = ScriptedUi::new(&[
            "Ann", "U", "U", "U", "U", "U", "U", "U", "Y", //
            "Bob", "U", "U", "U", "U", "U", "U", "U", "y", //
            "Cid", "U", "U", "U", "U", "U", "U", "U", "no",
        ]);

        GameProcessor::new(&mut ui, &mut boards, &DefaultPlayerFactory::default())
            .start_game()
            .unwrap();

        assert_eq!(created, 3);
        assert!(ui.said("Welcome Bob"));
        assert!(ui.said("Well done Cid"));
    }

    #[test]
    fn long_names_are_asked_again() {
        let long_name = "0123456789012345678901234567890123456789";
        let mut ui = ScriptedUi::new(&[long_name, "Ann", "U", "U", "U", "U", "U", "U", "U", "N"]);

        run(&mut ui, &[]).unwrap();

        assert!(ui.said("at most 30 are allowed"));
        assert!(ui.said("Welcome Ann"));
        assert!(!ui.said(&format!("Welcome {long_name}")));
    }

    #[test]
    fn configured_lives_are_used() {
        let mut ui = ScriptedUi::new(&["Ann", "U", "N"]);
        let mut boards = || Board::with_generator([pos(6, 0)]);
        let players = DefaultPlayerFactory::new(1);

        GameProcessor::new(&mut ui, &mut boards, &players)
            .start_game()
            .unwrap();

        assert!(ui.said("Ann you have no lives left!"));
    }

    #[test]
    fn seeded_factory_advances_seed() {
        let mut factory = RandomBoardFactory::with_seed(5);

        assert_eq!(factory.create_board(), Board::with_seed(5));
        assert_eq!(factory.create_board(), Board::with_seed(6));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut ui = ScriptedUi::new(&[]);

        assert!(matches!(run(&mut ui, &[]), Err(GameError::Io(_))));
    }
}
