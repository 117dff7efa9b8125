//! Tokenizer for Brainfuck source text
//!
//! Converts raw source text into a flat [`Instruction`] sequence consumed by
//! the interpreter. Brainfuck's comment rule makes this trivial: every
//! character outside the eight-symbol table is silently discarded, so any
//! input (including empty input) tokenizes without error.

use super::instruction::Instruction;

/// Single-pass scanner over Brainfuck source text.
///
/// There is no lookahead and no state carried between characters; the
/// emitted instruction order matches source order among recognized symbols.
pub struct Tokenizer {
    source: Vec<char>,
    position: usize,
    instructions: Vec<Instruction>,
}

impl Tokenizer {
    /// Create a tokenizer over the given source text.
    pub fn new(source: &str) -> Self {
        Tokenizer {
            source: source.chars().collect(),
            position: 0,
            instructions: Vec::new(),
        }
    }

    /// Scan the source left to right, emitting one instruction per
    /// recognized symbol, and return the full sequence.
    pub fn tokenize(mut self) -> Vec<Instruction> {
        while self.position < self.source.len() {
            if let Some(instruction) = Instruction::from_symbol(self.source[self.position]) {
                self.instructions.push(instruction);
            }
            self.position += 1;
        }
        self.instructions
    }
}

/// Tokenize source text in one call.
pub fn tokenize(source: &str) -> Vec<Instruction> {
    Tokenizer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_symbols() {
        let instructions = tokenize("><+-.,[]");
        assert_eq!(
            instructions,
            vec![
                Instruction::MovePointerForward,
                Instruction::MovePointerBackward,
                Instruction::IncrementCell,
                Instruction::DecrementCell,
                Instruction::OutputCell,
                Instruction::InputCell,
                Instruction::LoopStart,
                Instruction::LoopEnd,
            ]
        );
    }

    #[test]
    fn test_repeated_symbol_emits_repeated_instruction() {
        for (ch, expected) in [
            ('+', Instruction::IncrementCell),
            ('>', Instruction::MovePointerForward),
            (']', Instruction::LoopEnd),
        ] {
            let source: String = std::iter::repeat(ch).take(7).collect();
            let instructions = tokenize(&source);
            assert_eq!(instructions.len(), 7);
            assert!(instructions.iter().all(|i| *i == expected));
        }
    }

    #[test]
    fn test_comments_are_discarded() {
        let instructions = tokenize("read a value, er: +comment+ then stop.");
        // The prose contributes one ',' one '.' and stray '+' signs; nothing else.
        assert_eq!(
            instructions,
            vec![
                Instruction::InputCell,
                Instruction::IncrementCell,
                Instruction::IncrementCell,
                Instruction::OutputCell,
            ]
        );
    }

    #[test]
    fn test_pure_comment_and_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("no instructions here at all").is_empty());
        assert!(tokenize("   \n\t\r\n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let instructions = tokenize("+[x>-y]<.");
        let symbols: String = instructions.iter().map(|i| i.symbol()).collect();
        assert_eq!(symbols, "+[>-]<.");
    }
}
