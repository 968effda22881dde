use diamondlog_core::MonthlySummary;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(name: &'static str, value: impl ToString) -> StatRow {
    StatRow { name, value: value.to_string() }
}

fn print_table(title: &str, rows: Vec<StatRow>) {
    println!("\n\x1b[1;36m{}\x1b[0m", title);
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn show_summary(summary: &MonthlySummary) {
    println!("Stats for {:04}-{:02}", summary.year, summary.month);
    if !summary.has_games() {
        println!("No games recorded this month.");
        return;
    }

    let team = &summary.team;
    print_table(
        "Team",
        vec![
            row("Games", team.games),
            row("W-L-D", format!("{}-{}-{}", team.wins, team.losses, team.draws)),
            row("Win %", &team.win_percentage),
            row("Runs", team.total_runs),
            row("Runs allowed", team.total_runs_allowed),
        ],
    );

    let batting = &summary.batting;
    if batting.games > 0 {
        print_table(
            "Batting",
            vec![
                row("Games", batting.games),
                row("AB", batting.at_bats),
                row("H", batting.hits),
                row("2B / 3B / HR", format!("{} / {} / {}", batting.doubles, batting.triples, batting.home_runs)),
                row("RBI", batting.rbis),
                row("R", batting.runs),
                row("BB", batting.walks),
                row("SO", batting.strikeouts),
                row("SB", batting.stolen_bases),
                row("SAC", batting.sacrifices),
                row("E", batting.errors),
                row("AVG", &batting.average),
                row("OBP", &batting.obp),
                row("SLG", &batting.slg),
                row("OPS", &batting.ops),
            ],
        );
    }

    let pitching = &summary.pitching;
    if pitching.games > 0 {
        print_table(
            "Pitching",
            vec![
                row("Games", pitching.games),
                row("W-L", format!("{}-{}", pitching.wins, pitching.losses)),
                row("SV / HLD", format!("{} / {}", pitching.saves, pitching.holds)),
                row("IP", format!("{:.1}", pitching.innings_pitched)),
                row("H", pitching.hits_allowed),
                row("R / ER", format!("{} / {}", pitching.runs_allowed, pitching.earned_runs)),
                row("BB", pitching.walks_allowed),
                row("SO", pitching.strikeouts_thrown),
                row("HR", pitching.home_runs_allowed),
                row("ERA", &pitching.era),
                row("WHIP", &pitching.whip),
            ],
        );
    }
}
