use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type Error = Box<dyn std::error::Error>;

struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    fn parse(text: &str) -> Result<Self, Error> {
        let mut parts = text.trim().splitn(3, '.');
        let mut next = || -> Result<u64, Error> {
            Ok(parts
                .next()
                .ok_or_else(|| format!("malformed version: {}", text))?
                .parse::<u64>()?)
        };
        Ok(Self {
            major: next()?,
            minor: next()?,
            patch: next()?,
        })
    }

    fn bump(&self, kind: &str) -> Option<String> {
        let (major, minor, patch) = match kind {
            "major" => (self.major + 1, 0, 0),
            "minor" => (self.major, self.minor + 1, 0),
            "patch" => (self.major, self.minor, self.patch + 1),
            _ => return None,
        };
        Some(format!("{}.{}.{}", major, minor, patch))
    }
}

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{}: ", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    Ok(prompt(&format!("{} (y/n)", message))?.to_lowercase() == "y")
}

fn git(args: &[&str]) -> Result<String, Error> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(format!("git {} failed", args.join(" ")).into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn run(program: &str, args: &[&str], error_msg: &str) -> Result<(), Error> {
    println!("Executing: {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(error_msg.to_string().into());
    }
    Ok(())
}

fn release_notes() -> Result<String, Error> {
    let range = match git(&["describe", "--tags", "--abbrev=0"]) {
        Ok(tag) => format!("{}..HEAD", tag),
        Err(_) => "HEAD".to_string(),
    };
    git(&["log", "--pretty=format:- %s", &range])
}

fn main() -> Result<(), Error> {
    let dry_run = env::args().any(|arg| arg == "--dry-run");

    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo_content.parse::<DocumentMut>()?;

    let current = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?
        .to_string();
    let version = Version::parse(&current)?;

    println!("Current version is: {}", current);
    let choice = prompt("Bump (major/minor/patch) or enter a version")?;
    let new_version = match version.bump(&choice) {
        Some(bumped) => bumped,
        None if choice.is_empty() => return Err("Version cannot be empty".into()),
        None => {
            // Treat anything else as an explicit version; validate it parses.
            Version::parse(&choice)?;
            choice
        }
    };

    let notes = release_notes()?;
    if notes.is_empty() {
        println!("Warning: no commits since the last tag.");
        if !confirm("Continue with empty release notes?")? {
            println!("Release aborted.");
            return Ok(());
        }
    } else {
        println!("Release notes:\n{}", notes);
    }

    if dry_run {
        println!("Dry run: would release {} -> {}", current, new_version);
        return Ok(());
    }

    if !confirm(&format!("Ready to release version {}?", new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    doc["package"]["version"] = Item::from(new_version.as_str());
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Updated Cargo.toml with new version: {}", new_version);

    // Refresh Cargo.lock so the commit below picks it up.
    run("cargo", &["check"], "Failed to update Cargo.lock")?;

    run(
        "git",
        &["add", "Cargo.toml", "Cargo.lock"],
        "Failed to stage version bump",
    )?;
    run(
        "git",
        &[
            "commit",
            "-m",
            &format!("Bump version to {}", new_version),
        ],
        "Failed to commit version bump",
    )?;
    let tag = format!("v{}", new_version);
    run(
        "git",
        &["tag", "-a", &tag, "-m", &format!("Version {}", new_version)],
        "Failed to create tag",
    )?;
    run("git", &["push"], "Failed to push commits")?;
    run("git", &["push", "--tags"], "Failed to push tags")?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"], "Failed to publish to crates.io")?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        run(
            "gh",
            &["release", "create", &tag, "--title", &tag, "--notes", &notes],
            "Failed to create GitHub release",
        )?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released version {}", new_version);
    Ok(())
}
