use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_ls_parses_with_defaults() {
    let cli = Cli::try_parse_from(["sf", "ls"]).unwrap();
    assert_eq!(cli.global.migrations_dir, "./migrations");
    assert!(!cli.global.verbose);
    assert!(matches!(cli.command, Commands::Ls(_)));
}

#[test]
fn test_run_parses_connection_flags() {
    let cli = Cli::try_parse_from([
        "sf",
        "-m",
        "db/migrations",
        "run",
        "--host",
        "localhost",
        "--database",
        "appdb",
        "--username",
        "migrator",
        "--password",
        "s3cret",
        "--strict",
    ])
    .unwrap();
    assert_eq!(cli.global.migrations_dir, "db/migrations");
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.host, "localhost");
            assert_eq!(args.port, 5432);
            assert!(args.strict);
            assert!(!args.json);
        }
        other => panic!("expected run command, got {other:?}"),
    }
}
