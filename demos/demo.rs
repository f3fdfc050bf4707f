use time64::{Precision, Timestamp};

fn main() -> Result<(), time64::Error> {
    // Current time
    let now = Timestamp::now(Precision::Milliseconds);
    println!("Now: {} ({} ms since 1970)", now, now.to_platform_millis());
    let (year, month, day) = now.date();
    println!(
        "Date: {:04}-{:02}-{:02}, day {} of the year",
        year,
        month,
        day,
        now.day_of_year()
    );
    println!(
        "Time: {:02}:{:02}:{:02}.{:03} ({} o'clock on a 12h dial)",
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond(),
        now.hour12()
    );
    println!(
        "Weeks: {} (Sunday-first), {} (Monday-first)",
        now.week_of_year_sunday(),
        now.week_of_year_monday()
    );

    // Precision conversion
    let t = Timestamp::new(86_400_123_456_789, Precision::Nanoseconds);
    println!("Seconds: {}", t.seconds());
    println!("Milliseconds: {}", t.milliseconds());
    println!("Microseconds: {}", t.microseconds());
    println!(
        "Sub-second fields: {} ms, {} μs, {} ns",
        t.millisecond(),
        t.microsecond(),
        t.nanosecond()
    );

    let mut chained = t;
    chained
        .change_precision(Precision::Seconds)
        .change_precision(Precision::Nanoseconds);
    println!("ns -> s -> ns: {} becomes {}", t, chained);

    // Named precisions
    let named = Timestamp::with_precision_name(1_500, "ms")?;
    println!("Named: {} = {} unix μs", named, named.to_unix_time_named("μs")?);
    if let Err(e) = "minutes".parse::<Precision>() {
        println!("Rejected: {}", e);
    }

    // Unix epoch translation
    let from_unix = Timestamp::from_unix_time(946_080_000 + 3_600, Precision::Milliseconds);
    println!("From unix: {} -> {:?}", from_unix, from_unix.date());

    Ok(())
}
