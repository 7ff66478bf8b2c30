//! Text rendering of arena snapshots.
//!
//! `[0-32: x] -> [32-100: FREE]`

use firstfit_core::alloc::Segment;

pub fn render<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = Segment<'a>>,
{
    segments
        .into_iter()
        .map(|segment| {
            let label = segment.id().unwrap_or("FREE");
            format!("[{}-{}: {}]", segment.start(), segment.end(), label)
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstfit_core::Arena;

    #[test]
    fn renders_free_and_allocated_segments() {
        let mut arena = Arena::new();
        arena.init(100);
        arena.allocate("x", 30).unwrap();
        assert_eq!(render(arena.snapshot()), "[0-32: x] -> [32-100: FREE]");
    }

    #[test]
    fn renders_segments_in_address_order() {
        let mut arena = Arena::new();
        arena.init(24);
        arena.allocate("a", 8).unwrap();
        arena.allocate("b", 8).unwrap();
        arena.free("a").unwrap();
        assert_eq!(
            render(arena.snapshot()),
            "[0-8: FREE] -> [8-16: b] -> [16-24: FREE]"
        );
    }

    #[test]
    fn renders_empty_arena_as_empty_string() {
        let arena = Arena::new();
        assert_eq!(render(arena.snapshot()), "");
    }
}
