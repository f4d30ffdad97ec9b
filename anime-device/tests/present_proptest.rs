//! Property-based tests for presenting buffers.

use anime_device::mock::EmulatedMatrix;
use anime_device::{AnimeMatrix, HardwareVariant};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = HardwareVariant> {
    prop_oneof![
        Just(HardwareVariant::Ga401),
        Just(HardwareVariant::Ga402),
        Just(HardwareVariant::Gu604),
    ]
}

proptest! {
    /// Whatever is in the buffer is exactly what the panel shows after present.
    #[test]
    fn panel_mirrors_buffer(
        variant in any_variant(),
        writes in proptest::collection::vec((0i32..1711, 0u8..=255), 0..200),
    ) {
        let mut matrix = AnimeMatrix::new(EmulatedMatrix::new(variant), variant);
        for (address, value) in writes {
            matrix.set_linear(address, value);
        }
        matrix.present().unwrap();

        prop_assert_eq!(matrix.transport().visible(), matrix.buffer().as_slice());
        prop_assert_eq!(matrix.transport().commits(), 1);
    }

    /// After N frames, call N+1 shows frame 0 again.
    #[test]
    fn animation_wraps(frames in 1usize..6) {
        let variant = HardwareVariant::Ga402;
        let mut matrix = AnimeMatrix::new(EmulatedMatrix::new(variant), variant);
        for i in 0..frames {
            matrix.set_linear(0, i as u8 + 1);
            matrix.add_frame();
        }

        for expected in 0..frames {
            prop_assert_eq!(matrix.present_next_frame().unwrap(), Some(expected));
        }
        prop_assert_eq!(matrix.present_next_frame().unwrap(), Some(0));
        prop_assert_eq!(matrix.transport().visible()[0], 1);
    }
}
