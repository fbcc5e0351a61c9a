use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    deal_initial, init_deck, Action, Card, CardSet, DeckSize, DrawPile, GameError, GameResult,
    IllegalMove, Player, Stack, Step, Suit, TurnQueue, TurnRecord, HAND_SIZE,
};

/// Where the round currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The table is clear and the player under the cursor attacks next.
    AwaitingAttack,
    AwaitingDefense,
    GameOver(GameResult),
}

/// Everything that decides what happens next, once the pile is empty.
#[derive(Hash, PartialEq, Eq)]
struct Position {
    cursor: usize,
    // Indexed by player, `None` for players who are out
    hands: Vec<Option<CardSet>>,
}

/// A single game, from the deal until somebody is left holding cards.
///
/// All cards are always in exactly one of: the draw pile, a hand, the table,
/// or the discard pile.
pub struct Game {
    players: Vec<Player>,
    draw_pile: DrawPile,
    trump: Suit,
    queue: TurnQueue,
    table: Option<Stack>,
    discarded: Vec<Card>,
    phase: Phase,
    turn: usize,
    deck_len: usize,
    seen_positions: HashSet<Position>,
}

impl Game {
    /// Shuffles a fresh deck, fixes the trump suit from its bottom card, and
    /// deals six cards to every player.
    pub fn new<R: Rng>(
        deck: DeckSize,
        mut players: Vec<Player>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(2..=4).contains(&players.len()) {
            return Err(GameError::InvalidPlayerCount {
                count: players.len(),
            });
        }
        let mut draw_pile = DrawPile::shuffled(init_deck(deck), rng);
        let trump = draw_pile
            .trump_suit()
            .expect("A freshly built deck is never empty");
        deal_initial(&mut players, &mut draw_pile, HAND_SIZE);
        let queue = TurnQueue::seeded_by_highest_trump(&players, trump, rng);
        Ok(Self::from_parts(players, draw_pile, trump, queue))
    }

    /// Sets up a game from already dealt hands.
    pub fn from_parts(
        players: Vec<Player>,
        draw_pile: DrawPile,
        trump: Suit,
        queue: TurnQueue,
    ) -> Self {
        let deck_len = draw_pile.len() + players.iter().map(|p| p.hand.len()).sum::<usize>();
        let order: Vec<&str> = queue.live().map(|i| players[i].name.as_str()).collect();
        info!(trump = %trump, ?order, deck_len, "New game");
        Self {
            players,
            draw_pile,
            trump,
            queue,
            table: None,
            discarded: Vec::new(),
            phase: Phase::AwaitingAttack,
            turn: 0,
            deck_len,
            seen_positions: HashSet::new(),
        }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn table(&self) -> Option<&Stack> {
        self.table.as_ref()
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn active_players(&self) -> usize {
        self.queue.active()
    }

    pub fn result(&self) -> Option<&GameResult> {
        match &self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Cards in the pile, all hands, on the table and discarded. Always equal
    /// to [`Game::deck_len()`].
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.table.as_ref().map_or(0, Stack::len)
            + self.discarded.len()
    }

    pub fn deck_len(&self) -> usize {
        self.deck_len
    }

    /// Plays until the game is over, reporting every turn to `on_turn`.
    pub fn run(&mut self, mut on_turn: impl FnMut(&TurnRecord)) -> Result<GameResult, GameError> {
        loop {
            match self.advance()? {
                Step::Turn(record) => on_turn(&record),
                Step::GameOver(result) => return Ok(result),
            }
        }
    }

    /// Asks the next player for a decision and resolves it.
    ///
    /// An error leaves every card where it was before the call.
    pub fn advance(&mut self) -> Result<Step, GameError> {
        if let Phase::GameOver(result) = &self.phase {
            return Ok(Step::GameOver(result.clone()));
        }
        let Some(player_idx) = self.queue.current() else {
            return Ok(Step::GameOver(self.finish(false)));
        };

        let record = match self.table.take() {
            None => {
                if self.is_repeated_position() {
                    return Ok(Step::GameOver(self.finish(true)));
                }
                let attack = self.propose_attack(player_idx)?;
                self.resolve_attack(player_idx, attack)
            }
            Some(attack) => match self.propose_defense(player_idx, &attack) {
                Ok(Some(defense)) => self.resolve_beat(player_idx, attack, defense),
                Ok(None) => self.resolve_take(player_idx, attack),
                Err(err) => {
                    self.table = Some(attack);
                    return Err(err);
                }
            },
        };
        self.turn += 1;
        Ok(Step::Turn(record))
    }

    /// Gets and validates an attack, and takes it out of the attacker's hand.
    fn propose_attack(&mut self, player_idx: usize) -> Result<Stack, GameError> {
        let player = &mut self.players[player_idx];
        let attack = player
            .strategy
            .decide(player.hand.cards(), None, self.trump)
            .map_err(|err| GameError::Strategy {
                player: player.name.clone(),
                err,
            })?
            .ok_or_else(|| GameError::NoAttack {
                player: player.name.clone(),
            })?;
        if attack.len() != 1 {
            let err = IllegalMove::AttackedWithWrongCount {
                count: attack.len(),
            };
            return Err(illegal_move(player, err));
        }
        player
            .hand
            .remove_stack(&attack)
            .map_err(|err| illegal_move(player, err))?;
        Ok(attack)
    }

    /// Gets and validates a defense, and takes it out of the defender's hand.
    /// `None` means the defender takes the table.
    fn propose_defense(
        &mut self,
        player_idx: usize,
        attack: &Stack,
    ) -> Result<Option<Stack>, GameError> {
        let player = &mut self.players[player_idx];
        let decision = player
            .strategy
            .decide(player.hand.cards(), Some(attack), self.trump)
            .map_err(|err| GameError::Strategy {
                player: player.name.clone(),
                err,
            })?;
        let Some(defense) = decision else {
            return Ok(None);
        };
        if defense.len() != attack.len() {
            let err = IllegalMove::DefendedWithWrongCount {
                expected: attack.len(),
                count: defense.len(),
            };
            return Err(illegal_move(player, err));
        }
        if let (Some(card), Some(enemy)) = (defense.first(), attack.first()) {
            if !card.beats(enemy, self.trump) {
                return Err(illegal_move(player, IllegalMove::DefenseDoesNotBeat { card, enemy }));
            }
        }
        player
            .hand
            .remove_stack(&defense)
            .map_err(|err| illegal_move(player, err))?;
        Ok(Some(defense))
    }

    fn resolve_attack(&mut self, player_idx: usize, attack: Stack) -> TurnRecord {
        debug!(player = self.players[player_idx].name, cards = ?attack.cards(), "Attack");
        let (drawn, eliminated) = self.replenish(player_idx, attack.len());
        self.table = Some(attack.clone());
        self.queue.advance();
        self.phase = Phase::AwaitingDefense;
        self.record(player_idx, Action::Attack { cards: attack }, drawn, eliminated)
    }

    /// Both stacks leave the game, and the defender attacks next.
    fn resolve_beat(&mut self, player_idx: usize, attack: Stack, defense: Stack) -> TurnRecord {
        debug!(player = self.players[player_idx].name, cards = ?defense.cards(), "Beat");
        let (drawn, eliminated) = self.replenish(player_idx, defense.len());
        self.discarded.extend(attack);
        self.discarded.extend(defense.iter().copied());
        if self.queue.active() <= 1 {
            self.finish(false);
        } else {
            self.phase = Phase::AwaitingAttack;
        }
        self.record(player_idx, Action::Beat { cards: defense }, drawn, eliminated)
    }

    /// The defender picks up the table and loses their turn to attack.
    fn resolve_take(&mut self, player_idx: usize, attack: Stack) -> TurnRecord {
        debug!(player = self.players[player_idx].name, cards = ?attack.cards(), "Take");
        self.players[player_idx].hand.add(attack.clone());
        self.queue.advance();
        if self.queue.active() == 1 {
            self.finish(false);
        } else {
            self.phase = Phase::AwaitingAttack;
        }
        self.record(player_idx, Action::Take { cards: attack }, 0, false)
    }

    /// Refills the hand under the cursor by `count` cards if it holds fewer
    /// than six. A player left with nothing to hold or draw is out.
    fn replenish(&mut self, player_idx: usize, count: usize) -> (usize, bool) {
        let hand = &mut self.players[player_idx].hand;
        let drawn = if hand.len() < HAND_SIZE {
            self.draw_pile.draw(count)
        } else {
            None
        };
        match drawn {
            Some(stack) => {
                let num_drawn = stack.len();
                hand.add(stack);
                debug!(num_drawn, remaining = self.draw_pile.len(), "Replenished");
                (num_drawn, false)
            }
            None if hand.is_empty() => {
                self.queue.eliminate_current();
                debug!(
                    player = self.players[player_idx].name,
                    active = self.queue.active(),
                    "Out of cards"
                );
                (0, true)
            }
            None => (0, false),
        }
    }

    /// Once the pile is gone and nobody can vary their play, a position seen
    /// before means the game would cycle forever.
    fn is_repeated_position(&mut self) -> bool {
        let deterministic = self
            .queue
            .live()
            .all(|idx| self.players[idx].strategy.is_deterministic());
        if !self.draw_pile.is_empty() || !deterministic {
            return false;
        }
        let position = Position {
            cursor: self.queue.cursor(),
            hands: (0..self.players.len())
                .map(|idx| {
                    self.queue
                        .is_live(idx)
                        .then(|| self.players[idx].hand.card_set())
                })
                .collect(),
        };
        !self.seen_positions.insert(position)
    }

    fn finish(&mut self, stalemate: bool) -> GameResult {
        let losers: Vec<String> = self
            .queue
            .live()
            .map(|idx| self.players[idx].name.clone())
            .collect();
        let result = if losers.is_empty() {
            GameResult::Draw
        } else if stalemate {
            GameResult::Stalemate { losers }
        } else {
            GameResult::Durak { losers }
        };
        info!(?result, turns = self.turn, "Game over");
        self.phase = Phase::GameOver(result.clone());
        result
    }

    fn record(
        &self,
        player_idx: usize,
        action: Action,
        drawn: usize,
        eliminated: bool,
    ) -> TurnRecord {
        TurnRecord {
            turn: self.turn,
            player: self.players[player_idx].name.clone(),
            action,
            drawn,
            eliminated,
        }
    }
}

fn illegal_move(player: &Player, err: IllegalMove) -> GameError {
    GameError::IllegalMove {
        player: player.name.clone(),
        err,
    }
}
