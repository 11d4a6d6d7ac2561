use valueobject_core::{Immutable, ValueEquality};
use valueobject_paint::Paint;

fn main() -> anyhow::Result<()> {
    valueobject_observability::init();

    let paint = Paint::new(255, 255, 0)?;
    let other_paint = Paint::new(127, 127, 0)?;

    report(&paint, &other_paint);
    report(&paint, &Paint::new(255, 255, 255)?);
    report(&paint, &Paint::new(255, 255, 0)?);

    let mixed_paint = paint.mix(&Paint::new(0, 0, 0)?);
    tracing::info!(%paint, mixed = %mixed_paint, "mixed with black");
    report(&mixed_paint, &other_paint);
    report(&mixed_paint, &mixed_paint);

    match paint.try_set("foo", &"foo") {
        Ok(()) => anyhow::bail!("{paint} accepted a write to `foo`"),
        Err(err) => tracing::info!(error = %err, "write rejected"),
    }

    if let Err(err) = Paint::new(255, 255, 256) {
        tracing::info!(error = %err, "construction rejected");
    }

    Ok(())
}

fn report(lhs: &Paint, rhs: &Paint) {
    let equal = lhs.equals(rhs);
    println!("{lhs} == {rhs}: {equal}");
    tracing::debug!(%lhs, %rhs, equal, "compared");
}
