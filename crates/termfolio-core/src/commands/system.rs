// crates/termfolio-core/src/commands/system.rs - Fixed-output and intent commands

use crate::html::escape;
use crate::output::Output;

use super::CommandContext;

const FORTUNES: [&str; 10] = [
    "\"The only way to do great work is to love what you do.\" - Steve Jobs",
    "\"Life is what happens to you while you're busy making other plans.\" - John Lennon",
    "\"The future belongs to those who believe in the beauty of their dreams.\" - Eleanor Roosevelt",
    "\"It is during our darkest moments that we must focus to see the light.\" - Aristotle",
    "\"The only impossible journey is the one you never begin.\" - Tony Robbins",
    "\"In the middle of difficulty lies opportunity.\" - Albert Einstein",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Experience is the name everyone gives to their mistakes.\" - Oscar Wilde",
    "\"The best time to plant a tree was 20 years ago. The second best time is now.\" - Chinese Proverb",
];

pub fn clear() -> Output {
    Output::Clear
}

pub fn github(ctx: &CommandContext<'_>) -> Output {
    Output::OpenUrl {
        url: ctx.config.profile.github_url.clone(),
        message: "Opening GitHub profile...".to_string(),
    }
}

pub fn date(ctx: &CommandContext<'_>) -> Output {
    Output::text(ctx.now.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

pub fn echo(args: &[String]) -> Output {
    Output::text(args.join(" "))
}

pub fn uname(ctx: &CommandContext<'_>) -> Output {
    Output::text(ctx.config.system.uname.clone())
}

pub fn neofetch(ctx: &CommandContext<'_>) -> Output {
    let rows: String = ctx
        .config
        .system
        .fields()
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="flex flex-wrap"><span class="text-terminal-accent font-bold w-20 flex-shrink-0">{}:</span><span class="text-terminal-text">{}</span></div>"#,
                label,
                escape(value)
            )
        })
        .collect();

    Output::html(format!(
        r#"<div class="flex flex-col justify-center space-y-2 min-w-0 flex-1 text-sm font-mono">{}</div>"#,
        rows
    ))
}

/// Pick a quote; the invocation clock stands in for a random source
pub fn fortune(ctx: &CommandContext<'_>) -> Output {
    let seed = ctx.now.timestamp_subsec_nanos() as usize ^ ctx.now.timestamp() as usize;
    let quote = FORTUNES[seed % FORTUNES.len()];

    Output::html(format!(
        r#"<div class="border-l-4 border-terminal-accent pl-4 py-2"><span class="text-terminal-text">{}</span></div>"#,
        escape(quote)
    ))
}
