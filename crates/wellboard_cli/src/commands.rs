//! REPL input parsing.

use anyhow::{bail, Context, Result};
use wellboard_core::{find_goal, Gender, Profile, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    Tips,
    Profile,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Profile {
        age: u32,
        gender: String,
        goals: Vec<String>,
    },
    Goals,
    Board,
    /// 1-based index into the visible list.
    Show(usize),
    Details,
    Back,
    Fav(usize),
    Favorites,
    Regenerate,
    Retry,
    Reset(ResetScope),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  profile <age> <gender> <goal,goal,...>  set up or edit your profile
  goals                                  list the available goals
  board                                  show your tips
  show <n>                               open tip n
  details                                load the full guide for the open tip
  back                                   return to the board
  fav <n>                                add or remove tip n from favorites
  favorites                              show your favorites
  regenerate                             throw away the current tips and generate new ones
  retry                                  retry a failed generation
  reset tips|profile|all                 clear tips, your profile, or everything
  help                                   show this help
  quit                                   exit";

fn index_arg(arg: Option<&str>, command: &str) -> Result<usize> {
    let raw = arg.with_context(|| format!("Usage: {command} <n>"))?;
    let n: usize = raw
        .parse()
        .with_context(|| format!("'{raw}' is not a tip number"))?;
    if n == 0 {
        bail!("Tip numbers start at 1");
    }
    Ok(n)
}

pub fn parse_input(line: &str) -> Result<Input> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        bail!("Empty command");
    };
    let arg = words.next();

    let input = match command.to_ascii_lowercase().as_str() {
        "profile" => {
            let usage = "Usage: profile <age> <gender> <goal,goal,...>";
            let age = arg.context(usage)?;
            let age: u32 = age.parse().with_context(|| format!("'{age}' is not a valid age"))?;
            let gender = words.next().context(usage)?.to_string();
            // Goals may be given comma- or space-separated.
            let goals: Vec<String> = words
                .flat_map(|w| w.split(','))
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect();
            Input::Profile { age, gender, goals }
        }
        "goals" => Input::Goals,
        "board" | "tips" => Input::Board,
        "show" | "open" => Input::Show(index_arg(arg, "show")?),
        "details" => Input::Details,
        "back" => Input::Back,
        "fav" | "favorite" => Input::Fav(index_arg(arg, "fav")?),
        "favorites" | "favs" => Input::Favorites,
        "regenerate" => Input::Regenerate,
        "retry" => Input::Retry,
        "reset" => match arg {
            Some("tips") => Input::Reset(ResetScope::Tips),
            Some("profile") => Input::Reset(ResetScope::Profile),
            Some("all") => Input::Reset(ResetScope::All),
            _ => bail!("Usage: reset tips|profile|all"),
        },
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => bail!("Unknown command '{other}'. Type `help` for the list."),
    };
    Ok(input)
}

/// Build the profile to submit. An existing profile keeps its creation time.
pub fn build_profile(
    existing: Option<&Profile>,
    age: u32,
    gender: &str,
    goal_ids: &[String],
) -> Result<Profile, ValidationError> {
    let gender = Gender::parse_str(gender).ok_or_else(|| ValidationError::UnknownGender(gender.to_string()))?;
    let goals = goal_ids
        .iter()
        .map(|id| find_goal(id).ok_or_else(|| ValidationError::UnknownGoal(id.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    match existing {
        Some(profile) => profile.revised(age, gender, goals),
        None => Profile::new(age, gender, goals),
    }
}
