use super::*;
use pretty_assertions::assert_eq;

#[test]
fn sum_combines_by_addition() {
    let sum = SumFunction;
    assert_eq!(sum.seed(&TypeRef::named("decimal")), "0");
    assert_eq!(sum.combine("acc", "item2.Price"), "acc = acc + item2.Price");
    assert_eq!(
        sum.accumulator_type(&TypeRef::named("decimal")),
        TypeRef::named("decimal")
    );
}

#[test]
fn count_ignores_the_item_and_counts_in_int() {
    let count = CountFunction;
    assert_eq!(count.combine("acc", "item2.Price"), "acc = acc + 1");
    assert_eq!(
        count.accumulator_type(&TypeRef::named("decimal")),
        TypeRef::named("int")
    );
}

#[test]
fn min_seeds_from_the_opposite_extreme() {
    let min = MinFunction;
    assert_eq!(min.seed(&TypeRef::named("decimal")), "decimal.MaxValue");
    assert_eq!(min.combine("acc", "x"), "acc = x < acc ? x : acc");
}

#[test]
fn max_seeds_from_the_opposite_extreme() {
    let max = MaxFunction;
    assert_eq!(max.seed(&TypeRef::named("int")), "int.MinValue");
    assert_eq!(max.combine("acc", "x"), "acc = x > acc ? x : acc");
}
