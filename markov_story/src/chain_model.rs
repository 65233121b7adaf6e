use std::collections::HashMap;

use crate::choice::Chooser;

pub type Token = String;

/// The two most recent tokens, oldest first. `None` marks "no token yet".
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct State {
    prev2: Option<Token>,
    prev1: Option<Token>,
}

impl State {
    pub fn start() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn new(prev2: Option<&str>, prev1: Option<&str>) -> Self {
        Self {
            prev2: prev2.map(str::to_string),
            prev1: prev1.map(str::to_string),
        }
    }

    /// `(a, b)` followed by `w` becomes `(b, w)`.
    pub fn advance(self, token: Token) -> Self {
        Self {
            prev2: self.prev1,
            prev1: Some(token),
        }
    }
}

/// Second-order word chain: every state maps to the tokens seen after it,
/// in training order, duplicates kept.
#[derive(Clone, Debug, Default)]
pub struct ChainModel {
    state: State,
    table: HashMap<State, Vec<Token>>,
}

impl ChainModel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let mut this = Self::new();
        this.train_sequence(tokens);
        return this;
    }

    pub fn reset(&mut self) {
        self.state = State::start();
    }

    pub fn train(&mut self, token: impl Into<Token>) {
        let token = token.into();
        let state = std::mem::take(&mut self.state);
        self.table
            .entry(state.clone())
            .or_default()
            .push(token.clone());
        self.state = state.advance(token);
    }

    pub fn train_sequence<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let mut count = 0usize;
        for token in tokens {
            self.train(token);
            count += 1;
        }
        tracing::debug!(tokens = count, states = self.table.len(), "trained sequence");
    }

    /// Steps the walk once. Returns `None` and leaves the state alone when
    /// the current state has never been seen in training.
    pub fn next<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Option<Token> {
        let choices = self.table.get(&self.state)?;
        let token = choices[chooser.choose_index(choices.len())].clone();
        let state = std::mem::take(&mut self.state);
        self.state = state.advance(token.clone());
        return Some(token);
    }

    /// Walks at most `max_tokens` steps from the current state, stopping early
    /// at the first state with no recorded continuation.
    pub fn generate<C: Chooser + ?Sized>(
        &mut self,
        max_tokens: usize,
        chooser: &mut C,
    ) -> Vec<Token> {
        let mut out = Vec::new();
        for _ in 0..max_tokens {
            match self.next(chooser) {
                Some(token) => out.push(token),
                None => break,
            }
        }
        return out;
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    #[cfg(test)]
    pub fn transitions(&self, state: &State) -> Option<&[Token]> {
        self.table.get(state).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
