use log::info;
use rstest::*;

use rand::{prelude::*, rngs::SmallRng, SeedableRng};

use crate::{
    prelude::{checksum, Config, DecodeMode, Epoch, Navigation, NavigationOpts, Session},
    tests::{init_logger, GGA_NO_FIX, GLL_VOID, HDG_WRAPPING, RMC_VOID, SUPPORTED, XDR},
};

/// Printable characters used to corrupt sentences
const ALPHABET: &[u8] = b"0123456789ABCDEFabcdefNSEWMTAV.,-*$ ";

pub struct FuzzTest {
    /// Name of this test
    name: String,
    /// Total number of lines
    num_lines: usize,
    /// Maximal number of corrupted bytes, per line
    max_corruptions: usize,
    /// Recompute the checksum after corruption, so the content reaches the decoders
    fix_checksum: bool,
}

impl FuzzTest {
    fn corrupt(&self, rng: &mut SmallRng, line: &str) -> String {
        let mut bytes = line.as_bytes().to_vec();

        let num_corruptions = rng.random_range(1..=self.max_corruptions);

        for _ in 0..num_corruptions {
            let index = rng.random_range(0..bytes.len());
            match rng.random_range(0..3) {
                0 => bytes[index] = ALPHABET[rng.random_range(0..ALPHABET.len())],
                1 if bytes.len() > 1 => {
                    bytes.remove(index);
                },
                _ => bytes.insert(index, ALPHABET[rng.random_range(0..ALPHABET.len())]),
            }
        }

        let corrupted = String::from_utf8_lossy(&bytes).to_string();

        if !self.fix_checksum {
            return corrupted;
        }

        let body = corrupted.trim_start_matches('$');
        let body = body.rsplit_once('*').map(|(body, _)| body).unwrap_or(body);
        format!("${}*{:02X}", body, checksum(body))
    }

    fn generate_lines(&self, rng: &mut SmallRng) -> Vec<String> {
        let mut pool = SUPPORTED.to_vec();
        pool.extend([GGA_NO_FIX, RMC_VOID, GLL_VOID, HDG_WRAPPING, XDR]);

        (0..self.num_lines)
            .map(|_| {
                let line = pool[rng.random_range(0..pool.len())];
                self.corrupt(rng, line)
            })
            .collect()
    }

    pub fn run(&self, mode: DecodeMode) {
        init_logger();

        let mut generator = rand::rng();
        let mut rng = SmallRng::from_rng(&mut generator);

        let cfg = Config::default().with_mode(mode);
        let opts = NavigationOpts::new(Epoch::from_gregorian_utc_at_midnight(2020, 6, 1));
        let mut session = Session::new(cfg, Navigation::new(opts));

        let lines = self.generate_lines(&mut rng);
        let accepted = session.consume(lines.iter());

        assert!(accepted <= self.num_lines);
        assert!(session.cache().len() <= SUPPORTED.len());

        if let Some(position) = &session.derived().position {
            assert!(position.latitude.is_finite());
            assert!(position.longitude.is_finite());
        }
        if let Some(heading) = &session.derived().heading {
            assert!((0.0..360.0).contains(&heading.degrees));
        }
        if let Some(depth) = &session.derived().depth {
            assert!(depth.meters.is_finite());
        }

        info!(
            "fuzz-test {} - {} accepted out of {} - {:?}",
            self.name,
            accepted,
            self.num_lines,
            session.derived()
        );
    }
}

#[rstest]
#[case("framing", 1000, 3, false)]
#[case("content", 1000, 3, true)]
#[case("heavy", 500, 20, true)]
fn corrupted_streams(
    #[case] name: &str,
    #[case] num_lines: usize,
    #[case] max_corruptions: usize,
    #[case] fix_checksum: bool,
) {
    let test = FuzzTest {
        name: name.to_string(),
        num_lines,
        max_corruptions,
        fix_checksum,
    };

    test.run(DecodeMode::Strict);
    test.run(DecodeMode::Permissive);
}
