mod tests {
    use myrtio_neopixel::{
        ChannelConfig, ChannelId, Color, ControllerConfig, Engine, Error, MemoryEngine,
        PixelRange, StripController, pack,
    };

    fn started(count0: usize, count1: usize) -> StripController<MemoryEngine> {
        let config = ControllerConfig::new([
            ChannelConfig::new(count0, 18),
            ChannelConfig::new(count1, 13),
        ]);
        let mut strip = StripController::new(MemoryEngine::new(), config);
        strip.begin().unwrap();
        strip
    }

    #[test]
    fn test_set_then_get() {
        let mut strip = started(8, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        pixels.set(3, pack(1, 2, 3, 4)).unwrap();
        assert_eq!(pixels.get(3).unwrap(), pack(1, 2, 3, 4));
        assert_eq!(pixels.get(2).unwrap(), Color::BLACK);
        assert_eq!(pixels.len(), 8);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut strip = started(4, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        assert_eq!(
            pixels.get(4),
            Err(Error::PixelOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            pixels.set(10, Color::rgb(1, 1, 1)),
            Err(Error::PixelOutOfRange { index: 10, len: 4 })
        );
    }

    #[test]
    fn test_range_round_trip() {
        let mut strip = started(10, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        let colors = [Color::rgb(1, 0, 0), Color::rgb(2, 0, 0), Color::rgb(3, 0, 0)];
        let range = PixelRange::new(Some(1), Some(7), 2);

        pixels.set_range(range, &colors).unwrap();

        assert_eq!(pixels.get_range(range).unwrap(), colors.to_vec());
        assert_eq!(pixels.get(1).unwrap(), colors[0]);
        assert_eq!(pixels.get(3).unwrap(), colors[1]);
        assert_eq!(pixels.get(5).unwrap(), colors[2]);
        assert_eq!(pixels.get(2).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_reversed_range_write() {
        let mut strip = started(3, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        let colors = [Color::rgb(1, 0, 0), Color::rgb(2, 0, 0), Color::rgb(3, 0, 0)];

        pixels.set_range(PixelRange::REVERSED, &colors).unwrap();

        assert_eq!(
            pixels.to_vec(),
            vec![Color::rgb(3, 0, 0), Color::rgb(2, 0, 0), Color::rgb(1, 0, 0)]
        );
        assert_eq!(pixels.get_range(PixelRange::REVERSED).unwrap(), colors.to_vec());
    }

    #[test]
    fn test_range_length_mismatch() {
        let mut strip = started(5, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        assert_eq!(
            pixels.set_range(0..3, &[Color::rgb(1, 1, 1)]),
            Err(Error::LengthMismatch {
                positions: 3,
                values: 1
            })
        );
        assert_eq!(pixels.get(0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_fill() {
        let mut strip = started(4, 0);
        let mut pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        pixels.fill(Color::rgb(0, 0, 9)).unwrap();
        assert_eq!(pixels.to_vec(), vec![Color::rgb(0, 0, 9); 4]);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut strip = started(2, 2);
        strip.set_pixel_color(ChannelId::Pwm1, 0, Color::rgb(0, 255, 0)).unwrap();
        assert_eq!(strip.pixel_color(ChannelId::Pwm0, 0).unwrap(), Color::BLACK);
        assert_eq!(
            strip.pixel_color(ChannelId::Pwm1, 0).unwrap(),
            Color::rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_reads_are_live() {
        let mut strip = started(2, 0);
        strip.set_pixel_color_rgb(ChannelId::Pwm0, 1, 5, 6, 7, 8).unwrap();
        let pixels = strip.pixels(ChannelId::Pwm0).unwrap();
        assert_eq!(pixels.get(1).unwrap(), pack(5, 6, 7, 8));

        let mut handle = strip.channel(ChannelId::Pwm0).unwrap();
        handle.set_brightness(10);
        let pixels = handle.into_pixels();
        assert_eq!(pixels.get(1).unwrap(), pack(5, 6, 7, 8));
        assert_eq!(strip.engine().unwrap().led_get(ChannelId::Pwm0, 1), pack(5, 6, 7, 8));
    }
}
