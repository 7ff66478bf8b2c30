use std::io::Cursor;

use firstfit_cli::Interpreter;
use firstfit_core::alloc::{Alignment, Arena};

fn run_script(arena: Arena, script: &str) -> (String, Arena) {
    let mut session = Interpreter::new(arena, Vec::new());
    session.run(Cursor::new(script)).unwrap();
    let arena = session.arena().clone();
    (String::from_utf8(session.into_output()).unwrap(), arena)
}

#[test]
fn bridging_free_merges_into_one_region() {
    let script = "\
INIT 100
ALLOC a 10
ALLOC b 10
ALLOC c 10
FREE a
FREE c
FREE b
EXIT
";
    let (transcript, arena) = run_script(Arena::new(), script);

    let expected = "\
Memory: [0-100: FREE]

Allocated 12 bytes at 0.
Memory: [0-12: a] -> [12-100: FREE]

Allocated 12 bytes at 12.
Memory: [0-12: a] -> [12-24: b] -> [24-100: FREE]

Allocated 12 bytes at 24.
Memory: [0-12: a] -> [12-24: b] -> [24-36: c] -> [36-100: FREE]

Freed a.
Memory: [0-12: FREE] -> [12-24: b] -> [24-36: c] -> [36-100: FREE]

Freed c.
Coalescing...
Memory: [0-12: FREE] -> [12-24: b] -> [24-100: FREE]

Freed b.
Coalescing...
Memory: [0-100: FREE]

Goodbye!
";
    assert_eq!(transcript, expected);
    assert_eq!(arena.free_regions().len(), 1);
}

#[test]
fn bad_input_does_not_end_the_session() {
    let script = "INIT\nINIT abc\nJUMP\n\nINIT 10\nALLOC a 12\nINSPECT\n";
    let (transcript, arena) = run_script(Arena::new(), script);

    assert!(transcript.contains("Usage: INIT <total_size>\n"));
    assert!(transcript.contains("Error: Invalid number format.\n"));
    assert!(transcript.contains("Unknown command: JUMP\n"));
    assert!(transcript.contains("OUT OF MEMORY: Cannot allocate 12 bytes.\n"));
    assert!(transcript.ends_with("Memory: [0-10: FREE]\n\n"));
    assert_eq!(arena.capacity(), 10);
}

#[test]
fn tabs_and_repeated_spaces_separate_arguments() {
    let script = "INIT 64\nALLOC\ta\t12\nALLOC  b   12\n  free \t a  \n";
    let (transcript, arena) = run_script(Arena::new(), script);

    let expected = "\
Memory: [0-64: FREE]

Allocated 12 bytes at 0.
Memory: [0-12: a] -> [12-64: FREE]

Allocated 12 bytes at 12.
Memory: [0-12: a] -> [12-24: b] -> [24-64: FREE]

Freed a.
Memory: [0-12: FREE] -> [12-24: b] -> [24-64: FREE]

";
    assert_eq!(transcript, expected);
    assert!(arena.get("a").is_none());
    assert_eq!(arena.get("b").map(|r| r.start), Some(12));
}

#[test]
fn commands_after_exit_are_not_run() {
    let (transcript, arena) = run_script(Arena::new(), "INIT 64\nquit\nALLOC a 4\n");
    assert!(transcript.ends_with("Goodbye!\n"));
    assert!(arena.get("a").is_none());
}

#[test]
fn prompt_is_written_before_each_line() {
    let mut session = Interpreter::new(Arena::new(), Vec::new()).with_prompt("> ");
    session.run(Cursor::new("INIT 8\n")).unwrap();
    let transcript = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(transcript, "> Memory: [0-8: FREE]\n\n> ");
}

#[test]
fn configured_alignment_applies_to_session() {
    let arena = Arena::with_alignment(Alignment::new(8).unwrap());
    let (transcript, _) = run_script(arena, "INIT 32\nALLOC a 1\nSTATS\n");
    assert!(transcript.contains("Allocated 8 bytes at 0.\n"));
    assert!(transcript.contains("Stats: capacity=32 alignment=8 allocated=8 (1 blocks)"));
}
