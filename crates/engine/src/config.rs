//! Sandbox configuration from environment variables and command-line args.
//!
//! Environment values that fail to parse fall back to the default. Command
//! line values override the environment and are strict: a bad value is an
//! error.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use tui_sandbox_core::{Ruleset, WorldState};
use tui_sandbox_types::{
    ControlMode, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_PIXEL_DENSITY, MAX_PIXEL_DENSITY,
};

use crate::game_loop::GameLoop;

/// Largest accepted canvas side.
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Largest accepted pixel buffer (`width * height * density^2`), 64 MiB of RGBA.
pub const MAX_PHYSICAL_PIXELS: u64 = 4096 * 4096;

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive terminal session.
    #[default]
    Play,
    /// Print the generated grid as ASCII and exit.
    Dump,
    /// Print the world snapshot as JSON and exit.
    Snapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    pub command: Command,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    pub density: u32,
    pub ruleset: Ruleset,
    pub mode: ControlMode,
    pub log_path: Option<PathBuf>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            command: Command::Play,
            seed: 1,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            density: DEFAULT_PIXEL_DENSITY,
            ruleset: Ruleset::classic(),
            mode: ControlMode::Keyboard,
            log_path: None,
        }
    }
}

impl SandboxConfig {
    /// Environment first, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env().apply_args(args)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup (`SANDBOX_*` variables).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let num = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };

        let seed = num("SANDBOX_SEED", defaults.seed);
        let width = match num("SANDBOX_WIDTH", defaults.width) {
            w if (1..=MAX_CANVAS_SIDE).contains(&w) => w,
            _ => defaults.width,
        };
        let height = match num("SANDBOX_HEIGHT", defaults.height) {
            h if (1..=MAX_CANVAS_SIDE).contains(&h) => h,
            _ => defaults.height,
        };
        let mut density =
            num("SANDBOX_PIXEL_DENSITY", defaults.density).clamp(1, MAX_PIXEL_DENSITY);
        while density > 1 && physical_pixels(width, height, density) > MAX_PHYSICAL_PIXELS {
            density -= 1;
        }
        let ruleset = lookup("SANDBOX_RULESET")
            .and_then(|s| Ruleset::from_name(s.trim()))
            .unwrap_or(defaults.ruleset);
        let mode = lookup("SANDBOX_MODE")
            .and_then(|s| ControlMode::from_str(s.trim()))
            .unwrap_or(defaults.mode);
        let log_path = lookup("SANDBOX_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            command: Command::Play,
            seed,
            width,
            height,
            density,
            ruleset,
            mode,
            log_path,
        }
    }

    /// Apply command-line arguments on top of `self`.
    ///
    /// An optional leading subcommand (`dump`, `snapshot`) is followed by
    /// `--flag value` pairs.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        match args.first().map(String::as_str) {
            Some("dump") => {
                self.command = Command::Dump;
                i = 1;
            }
            Some("snapshot") => {
                self.command = Command::Snapshot;
                i = 1;
            }
            Some("play") => {
                i = 1;
            }
            _ => {}
        }

        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--seed" => {
                    self.seed = parse_u32(flag, value()?)?;
                }
                "--width" => {
                    self.width = parse_side(flag, value()?)?;
                }
                "--height" => {
                    self.height = parse_side(flag, value()?)?;
                }
                "--density" => {
                    let v = value()?;
                    let d = parse_u32(flag, v)?;
                    if !(1..=MAX_PIXEL_DENSITY).contains(&d) {
                        return Err(anyhow!(
                            "invalid --density value: {} (expected 1..={})",
                            v,
                            MAX_PIXEL_DENSITY
                        ));
                    }
                    self.density = d;
                }
                "--ruleset" => {
                    let v = value()?;
                    self.ruleset = Ruleset::from_name(v).ok_or_else(|| {
                        anyhow!(
                            "unknown ruleset: {} (expected one of {})",
                            v,
                            Ruleset::NAMES.join(", ")
                        )
                    })?;
                }
                "--mode" => {
                    let v = value()?;
                    self.mode = ControlMode::from_str(v)
                        .ok_or_else(|| anyhow!("unknown mode: {} (expected keyboard or wander)", v))?;
                }
                "--log" => {
                    self.log_path = Some(PathBuf::from(value()?));
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 2;
        }

        let pixels = physical_pixels(self.width, self.height, self.density);
        if pixels > MAX_PHYSICAL_PIXELS {
            return Err(anyhow!(
                "canvas {}x{} at density {} needs {} pixels (limit {})",
                self.width,
                self.height,
                self.density,
                pixels,
                MAX_PHYSICAL_PIXELS
            ));
        }

        Ok(self)
    }

    /// Generate the world and spawn the default units.
    pub fn build_world(&self) -> WorldState {
        let mut world = WorldState::new(self.width, self.height, self.seed, self.ruleset.clone());
        world.spawn_default_units();
        world
    }

    pub fn build_loop(&self) -> GameLoop {
        GameLoop::new(self.build_world(), self.density, self.mode)
    }
}

fn physical_pixels(width: u32, height: u32, density: u32) -> u64 {
    let d = density as u64;
    width as u64 * height as u64 * d * d
}

fn parse_u32(flag: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn parse_side(flag: &str, value: &str) -> Result<u32> {
    let v = parse_u32(flag, value)?;
    if v == 0 || v > MAX_CANVAS_SIDE {
        return Err(anyhow!(
            "invalid {} value: {} (expected 1..={})",
            flag,
            value,
            MAX_CANVAS_SIDE
        ));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = SandboxConfig::from_lookup(|_| None);
        assert_eq!(cfg, SandboxConfig::default());
        assert_eq!((cfg.width, cfg.height), (640, 480));
    }

    #[test]
    fn env_values_are_read() {
        let cfg = SandboxConfig::from_lookup(lookup_from(&[
            ("SANDBOX_SEED", "99"),
            ("SANDBOX_WIDTH", "120"),
            ("SANDBOX_PIXEL_DENSITY", "2"),
            ("SANDBOX_RULESET", "Contour"),
            ("SANDBOX_MODE", "wander"),
            ("SANDBOX_LOG_PATH", " /tmp/sandbox.jsonl "),
        ]));
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.width, 120);
        assert_eq!(cfg.density, 2);
        assert_eq!(cfg.ruleset.name, "contour");
        assert_eq!(cfg.mode, ControlMode::Wander);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/sandbox.jsonl")));
    }

    #[test]
    fn bad_env_values_fall_back() {
        let cfg = SandboxConfig::from_lookup(lookup_from(&[
            ("SANDBOX_SEED", "abc"),
            ("SANDBOX_WIDTH", "0"),
            ("SANDBOX_PIXEL_DENSITY", "40"),
            ("SANDBOX_RULESET", "lava"),
            ("SANDBOX_LOG_PATH", "  "),
        ]));
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.width, CANVAS_WIDTH);
        assert_eq!(cfg.density, MAX_PIXEL_DENSITY);
        assert_eq!(cfg.ruleset.name, "classic");
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn args_override_env() {
        let cfg = SandboxConfig::from_lookup(lookup_from(&[("SANDBOX_SEED", "5")]))
            .apply_args(&args(&["dump", "--seed", "8", "--width", "32", "--ruleset", "veins"]))
            .unwrap();
        assert_eq!(cfg.command, Command::Dump);
        assert_eq!(cfg.seed, 8);
        assert_eq!(cfg.width, 32);
        assert_eq!(cfg.ruleset.name, "veins");
    }

    #[test]
    fn bad_args_are_errors() {
        let base = SandboxConfig::default();
        assert!(base.clone().apply_args(&args(&["--seed"])).is_err());
        assert!(base.clone().apply_args(&args(&["--seed", "x"])).is_err());
        assert!(base.clone().apply_args(&args(&["--density", "9"])).is_err());
        assert!(base.clone().apply_args(&args(&["--height", "0"])).is_err());
        assert!(base.clone().apply_args(&args(&["--mode", "auto"])).is_err());
        assert!(base.apply_args(&args(&["--fly"])).is_err());
    }

    #[test]
    fn oversized_pixel_buffer_is_rejected() {
        let base = SandboxConfig::default();
        let big = args(&["--width", "4096", "--height", "4096"]);
        assert!(base.clone().apply_args(&big).is_ok());

        let dense = args(&["--width", "4096", "--height", "4096", "--density", "2"]);
        let err = base.clone().apply_args(&dense).unwrap_err();
        assert!(err.to_string().contains("density 2"), "{}", err);

        let fits = args(&["--width", "2048", "--height", "2048", "--density", "2"]);
        assert_eq!(base.apply_args(&fits).unwrap().density, 2);
    }

    #[test]
    fn env_density_shrinks_to_fit_the_canvas() {
        let cfg = SandboxConfig::from_lookup(lookup_from(&[
            ("SANDBOX_WIDTH", "2048"),
            ("SANDBOX_HEIGHT", "2048"),
            ("SANDBOX_PIXEL_DENSITY", "4"),
        ]));
        assert_eq!(cfg.density, 2);

        let cfg = SandboxConfig::from_lookup(lookup_from(&[
            ("SANDBOX_WIDTH", "4096"),
            ("SANDBOX_HEIGHT", "4096"),
            ("SANDBOX_PIXEL_DENSITY", "3"),
        ]));
        assert_eq!(cfg.density, 1);
    }

    #[test]
    fn build_loop_uses_config() {
        let cfg = SandboxConfig {
            width: 40,
            height: 30,
            density: 2,
            ..SandboxConfig::default()
        };
        let gl = cfg.build_loop();
        assert_eq!(gl.pixels().physical_width(), 80);
        assert_eq!(gl.world().units().len(), 3);
    }
}
