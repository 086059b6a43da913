// tests/config_load.rs
use dogeify::config::{ENV_CONFIG_PATH, ENV_SEED};
use dogeify::{load_config_default, load_config_from, Dogeify, ProcessOptions};
use std::{env, fs};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("dogeify.toml");
    fs::write(
        &p_toml,
        r#"
seed = 9
ignore = ["bork", { pattern = "^the " }]
"#,
    )
    .unwrap();
    let c = load_config_from(&p_toml).unwrap();
    assert_eq!(c.ignore.len(), 2);

    let p_json = dir.path().join("dogeify.json");
    fs::write(&p_json, r#"{"ignore": [{"pattern": "x+"}]}"#).unwrap();
    let cj = load_config_from(&p_json).unwrap();
    assert_eq!(cj.ignore.len(), 1);

    let p_bad = dir.path().join("bad.toml");
    fs::write(&p_bad, "ignore = [3.5]").unwrap();
    let err = load_config_from(&p_bad).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"), "{err:#}");
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the test never reads a real config/ dir
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_SEED);

    // 1) Nothing anywhere -> defaults
    let c = load_config_default().unwrap();
    assert!(c.ignore.is_empty());
    assert_eq!(c.seed, None);

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("dogeify.toml"), r#"ignore = ["moon"]"#).unwrap();
    let c = load_config_default().unwrap();
    assert_eq!(c.ignore.len(), 1);

    // 3) Env path wins
    let p_env = tmp.path().join("other.json");
    fs::write(&p_env, r#"{"seed": 5, "ignore": ["a", "b"]}"#).unwrap();
    env::set_var(ENV_CONFIG_PATH, p_env.display().to_string());
    let c = load_config_default().unwrap();
    assert_eq!(c.ignore.len(), 2);
    assert_eq!(c.seed, Some(5));

    // 4) Seed override on top
    env::set_var(ENV_SEED, "77");
    let c = load_config_default().unwrap();
    assert_eq!(c.seed, Some(77));

    // 5) Env path to nowhere is an error
    env::set_var(ENV_CONFIG_PATH, tmp.path().join("missing.toml"));
    assert!(load_config_default().is_err());

    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_SEED);
    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn instance_from_config_uses_lexicon_ignore_and_seed() {
    env::remove_var(ENV_SEED);
    let dir = tempfile::tempdir().unwrap();
    let lex = dir.path().join("lex.json");
    fs::write(&lex, r#"{"shibe": "NNS"}"#).unwrap();

    let cfg_path = dir.path().join("dogeify.toml");
    fs::write(
        &cfg_path,
        format!(
            "seed = 3\nlexicon_path = {:?}\nignore = [\"moon\"]\n",
            lex.display().to_string()
        ),
    )
    .unwrap();

    let cfg = load_config_from(&cfg_path).unwrap();
    let mut a = Dogeify::from_config(&cfg).unwrap();
    let mut b = Dogeify::from_config(&cfg).unwrap();

    let out = a.process("shibe moon", &ProcessOptions::default());
    assert!(out.contains("shibe."), "{out}");
    assert!(!out.contains("moon"), "{out}");
    assert_eq!(out, b.process("shibe moon", &ProcessOptions::default()));
}

#[serial_test::serial]
#[test]
fn relative_lexicon_path_found_from_another_cwd() {
    env::remove_var(ENV_SEED);
    env::remove_var(ENV_CONFIG_PATH);
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("lex.json"), r#"{"shibe": "NNS"}"#).unwrap();
    fs::write(
        cfg_dir.join("dogeify.toml"),
        "seed = 2\nlexicon_path = \"lex.json\"\n",
    )
    .unwrap();

    // Lookup is CWD-relative ("config/dogeify.toml"); ./lex.json does not exist
    env::set_current_dir(tmp.path()).unwrap();
    let result = load_config_default().and_then(|cfg| {
        let mut d = Dogeify::from_config(&cfg)?;
        Ok((cfg, d.process("shibe", &ProcessOptions::default())))
    });
    env::set_current_dir(&old).unwrap();

    let (cfg, out) = result.unwrap();
    assert_eq!(
        cfg.lexicon_path.as_deref(),
        Some(std::path::Path::new("config/lex.json"))
    );
    assert!(out.contains("shibe."), "{out}");
}
