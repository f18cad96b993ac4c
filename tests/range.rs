mod tests {
    use myrtio_neopixel::{Error, PixelRange};

    #[test]
    fn test_full_range() {
        assert_eq!(PixelRange::FULL.resolve(4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(PixelRange::from(..).resolve(0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(PixelRange::REVERSED.resolve(4).unwrap(), vec![3, 2, 1, 0]);
        assert_eq!(PixelRange::REVERSED.resolve(0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_std_ranges() {
        assert_eq!(PixelRange::from(1..3).resolve(10).unwrap(), vec![1, 2]);
        assert_eq!(PixelRange::from(1..=3).resolve(10).unwrap(), vec![1, 2, 3]);
        assert_eq!(PixelRange::from(7..).resolve(10).unwrap(), vec![7, 8, 9]);
        assert_eq!(PixelRange::from(..2).resolve(10).unwrap(), vec![0, 1]);
        assert_eq!(PixelRange::from(..=2).resolve(10).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bounds_are_clamped() {
        assert_eq!(PixelRange::from(3..100).resolve(5).unwrap(), vec![3, 4]);
        assert_eq!(PixelRange::from(8..12).resolve(5).unwrap(), Vec::<usize>::new());
        assert_eq!(PixelRange::from(4..2).resolve(5).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_negative_bounds_count_from_end() {
        let range = PixelRange::new(Some(-3), None, 1);
        assert_eq!(range.resolve(5).unwrap(), vec![2, 3, 4]);

        let range = PixelRange::new(None, Some(-1), 1);
        assert_eq!(range.resolve(5).unwrap(), vec![0, 1, 2, 3]);

        let range = PixelRange::new(Some(-100), Some(2), 1);
        assert_eq!(range.resolve(5).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_steps() {
        assert_eq!(PixelRange::FULL.with_step(2).resolve(7).unwrap(), vec![0, 2, 4, 6]);
        assert_eq!(PixelRange::new(Some(1), None, 3).resolve(10).unwrap(), vec![1, 4, 7]);
        assert_eq!(PixelRange::new(Some(8), Some(2), -2).resolve(10).unwrap(), vec![8, 6, 4]);
        assert_eq!(PixelRange::new(Some(100), None, -3).resolve(10).unwrap(), vec![9, 6, 3, 0]);
    }

    #[test]
    fn test_indices() {
        assert_eq!(PixelRange::FULL.indices(5).unwrap(), (0, 5, 1));
        assert_eq!(PixelRange::REVERSED.indices(5).unwrap(), (4, -1, -1));
        assert_eq!(PixelRange::new(Some(-2), Some(10), 1).indices(5).unwrap(), (3, 5, 1));
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert_eq!(PixelRange::FULL.with_step(0).resolve(5), Err(Error::ZeroStep));
    }
}
