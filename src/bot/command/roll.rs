//! `/roll`: random numbers between 1 and a maximum.

use rand::Rng;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, UserId,
};

use crate::bot::command::integer_option;
use crate::error::AppError;

pub const NAME: &str = "roll";
pub const DESCRIPTION: &str = "Roll a random number";

const DEFAULT_MAX: u32 = 100;
const MIN_ROLL_VALUE: u32 = 2;
const MAX_ROLL_VALUE: u32 = 1_000_000;
const DEFAULT_COUNT: u32 = 1;
const MAX_ROLL_COUNT: u32 = 100;

const DICE_THUMBNAIL: &str =
    "https://cdn.discordapp.com/attachments/979941646487650314/1009072528083398746/dice.png";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max",
                format!(
                    "Roll a random number between 1 and this value. Default is {}, maximum is {}.",
                    DEFAULT_MAX,
                    digit_separated(MAX_ROLL_VALUE)
                ),
            )
            .required(false)
            .min_int_value(MIN_ROLL_VALUE.into())
            .max_int_value(MAX_ROLL_VALUE.into()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "count",
                format!(
                    "How many times do you want to roll this dice? Default is {} time, maximum is {}.",
                    DEFAULT_COUNT, MAX_ROLL_COUNT
                ),
            )
            .required(false)
            .min_int_value(DEFAULT_COUNT.into())
            .max_int_value(MAX_ROLL_COUNT.into()),
        )
}

pub fn detailed_description() -> String {
    format!(
        "**Name**: `roll`\n\
         **Syntax:** `/roll [max] [count]`\n\n\
         **Example usage:**\n`/roll`\n`/roll 100000 10`\n\n\
         **Description:**\n\
         Roll a random number between 1 and a given max number.\n\
         The default max is {default}, highest possible is {max}.\n\n\
         **Arguments:**\n\
         `[max]`: *(optional)* The upper limit (between {min} and {max}). Default is {default}.\n\
         `[count]`: *(optional)* Choose the number of times to roll (between 1 and {count}). Default is 1.",
        default = DEFAULT_MAX,
        min = MIN_ROLL_VALUE,
        max = digit_separated(MAX_ROLL_VALUE),
        count = MAX_ROLL_COUNT,
    )
}

/// Validated `/roll` options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollRequest {
    pub max: u32,
    pub count: u32,
}

impl RollRequest {
    /// Applies defaults and checks ranges.
    ///
    /// Discord enforces the ranges on its side; values outside them are still
    /// rejected here.
    ///
    /// # Returns
    /// - `Ok(RollRequest)` - Options within range
    /// - `Err(AppError::BadRequest)` - `max` or `count` out of range
    pub fn new(max: Option<i64>, count: Option<i64>) -> Result<Self, AppError> {
        let max = checked(max, DEFAULT_MAX, MIN_ROLL_VALUE, MAX_ROLL_VALUE, "max")?;
        let count = checked(count, DEFAULT_COUNT, 1, MAX_ROLL_COUNT, "count")?;
        Ok(Self { max, count })
    }

    /// Both options at their maximum get a joke instead of rolls.
    pub fn is_absurd(&self) -> bool {
        self.max == MAX_ROLL_VALUE && self.count == MAX_ROLL_COUNT
    }
}

fn checked(
    value: Option<i64>,
    default: u32,
    min: u32,
    max: u32,
    name: &str,
) -> Result<u32, AppError> {
    let Some(value) = value else {
        return Ok(default);
    };

    u32::try_from(value)
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "`{}` must be between {} and {}.",
                name,
                min,
                digit_separated(max)
            ))
        })
}

/// Rolls `count` independent numbers in `[1, max]`.
pub fn roll_dice<R: Rng>(rng: &mut R, max: u32, count: u32) -> Vec<u32> {
    (0..count).map(|_| rng.random_range(1..=max)).collect()
}

/// Formats a number with comma thousands separators, e.g. `1,000,000`.
fn digit_separated(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn roll_message<R: Rng>(
    rng: &mut R,
    user_id: UserId,
    request: RollRequest,
) -> CreateInteractionResponseMessage {
    if request.is_absurd() {
        return CreateInteractionResponseMessage::new()
            .content(format!("<@{}> bruh are you ok?", user_id));
    }

    let rolls = roll_dice(rng, request.max, request.count)
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let times = if request.count > 1 {
        format!(" **{}** times.", request.count)
    } else {
        ".".to_string()
    };

    let embed = CreateEmbed::new()
        .color(rng.random_range(0..=0xFFFFFF_u32))
        .thumbnail(DICE_THUMBNAIL)
        .description(format!("**Rolls**\n\n{}", rolls));

    CreateInteractionResponseMessage::new()
        .content(format!(
            "<@{}> rolled a **{}**-sided die{}",
            user_id, request.max, times
        ))
        .embed(embed)
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let options = command.data.options();
    let request = RollRequest::new(
        integer_option(&options, "max"),
        integer_option(&options, "count"),
    )?;

    let message = roll_message(&mut rand::rng(), command.user.id, request);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::rng;

    /// Tests option defaults.
    ///
    /// Expected: a single roll of a 100-sided die
    #[test]
    fn missing_options_use_defaults() {
        let request = RollRequest::new(None, None).unwrap();

        assert_eq!(request, RollRequest { max: 100, count: 1 });
        assert!(!request.is_absurd());
    }

    /// Tests range validation.
    ///
    /// Expected: BadRequest for values Discord should have rejected
    #[test]
    fn out_of_range_options_are_rejected() {
        assert!(matches!(RollRequest::new(Some(1), None), Err(AppError::BadRequest(_))));
        assert!(matches!(
            RollRequest::new(Some(1_000_001), None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(RollRequest::new(None, Some(0)), Err(AppError::BadRequest(_))));
        assert!(matches!(RollRequest::new(None, Some(-3)), Err(AppError::BadRequest(_))));
    }

    /// Tests the joke reply trigger.
    ///
    /// Expected: only when both options are at their maximum
    #[test]
    fn both_maxima_are_absurd() {
        assert!(RollRequest::new(Some(1_000_000), Some(100)).unwrap().is_absurd());
        assert!(!RollRequest::new(Some(1_000_000), Some(99)).unwrap().is_absurd());
    }

    /// Tests the dice rolls.
    ///
    /// Expected: `count` values, all within [1, max]
    #[test]
    fn rolls_stay_within_bounds() {
        let mut rng = rng::seeded(7);

        let rolls = roll_dice(&mut rng, 6, 100);

        assert_eq!(rolls.len(), 100);
        assert!(rolls.iter().all(|roll| (1..=6).contains(roll)));
    }

    #[test]
    fn digit_separated_groups_thousands() {
        assert_eq!(digit_separated(100), "100");
        assert_eq!(digit_separated(1_000), "1,000");
        assert_eq!(digit_separated(1_000_000), "1,000,000");
    }
}
