//! Structural loop-bracket matching
//!
//! Brainfuck loops carry no stored jump targets; every taken jump scans the
//! instruction sequence for its partner, tracking nesting depth. Both scans
//! follow the same shape: a counter seeded at 1, incremented on a
//! same-direction bracket, decremented on its counterpart, done at 0.
//!
//! Unbalanced programs are not an error: when the scan runs off the end of
//! the sequence the original index comes back unchanged, which turns the
//! jump into a no-op and lets execution fall through sequentially.

use crate::lexer::Instruction;

/// Find the index of the `]` matching the `[` at `start_index`.
///
/// Returns `start_index` unchanged when no match exists.
pub fn find_matching_loop_end(program: &[Instruction], start_index: usize) -> usize {
    let mut loop_level = 1;
    for (i, instruction) in program.iter().enumerate().skip(start_index + 1) {
        match instruction {
            Instruction::LoopStart => loop_level += 1,
            Instruction::LoopEnd => {
                loop_level -= 1;
                if loop_level == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    start_index // unbalanced
}

/// Find the index of the `[` matching the `]` at `end_index`.
///
/// Returns `end_index` unchanged when no match exists.
pub fn find_matching_loop_start(program: &[Instruction], end_index: usize) -> usize {
    let mut loop_level = 1;
    for i in (0..end_index).rev() {
        match program[i] {
            Instruction::LoopEnd => loop_level += 1,
            Instruction::LoopStart => {
                loop_level -= 1;
                if loop_level == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    end_index // unbalanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_simple_pair() {
        let program = tokenize("[-]");
        assert_eq!(find_matching_loop_end(&program, 0), 2);
        assert_eq!(find_matching_loop_start(&program, 2), 0);
    }

    #[test]
    fn test_nested_pairs() {
        let program = tokenize("[[+]-[.]]");
        assert_eq!(find_matching_loop_end(&program, 0), 8);
        assert_eq!(find_matching_loop_end(&program, 1), 3);
        assert_eq!(find_matching_loop_end(&program, 5), 7);
        assert_eq!(find_matching_loop_start(&program, 8), 0);
        assert_eq!(find_matching_loop_start(&program, 3), 1);
        assert_eq!(find_matching_loop_start(&program, 7), 5);
    }

    #[test]
    fn test_matching_is_an_inverse() {
        let program = tokenize("+[>[-]<[[.]]]-");
        for (i, instruction) in program.iter().enumerate() {
            match instruction {
                Instruction::LoopStart => {
                    let end = find_matching_loop_end(&program, i);
                    assert_ne!(end, i);
                    assert_eq!(find_matching_loop_start(&program, end), i);
                }
                Instruction::LoopEnd => {
                    let start = find_matching_loop_start(&program, i);
                    assert_ne!(start, i);
                    assert_eq!(find_matching_loop_end(&program, start), i);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_unbalanced_returns_original_index() {
        let open_only = tokenize("[+");
        assert_eq!(find_matching_loop_end(&open_only, 0), 0);

        let close_only = tokenize("+]");
        assert_eq!(find_matching_loop_start(&close_only, 1), 1);

        let nested_unbalanced = tokenize("[[+]");
        assert_eq!(find_matching_loop_end(&nested_unbalanced, 0), 0);
        assert_eq!(find_matching_loop_end(&nested_unbalanced, 1), 3);
    }
}
