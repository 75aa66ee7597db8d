use patmatch::{
    begin, ds, end, find, find_by, is, is_some, matching, next, none, one_of, pattern, prev,
    range, regex, size, sized, some, sregex, ssize, ssized, typed, val, valued, Destructure, Eval,
    Operand, Predicate, Variants, _x, _y, _z, __,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;

// ============ Resolution ============

#[test]
fn test_first_matching_value_wins() {
    let hit = matching((5,)).arms((
        pattern![10].to(1),
        pattern![5].to(2),
        pattern![3].to(3),
        pattern![_].to(4),
    ));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_no_wildcard_no_match() {
    let hit = matching((15,)).arms((pattern![10].to(1), pattern![5].to(2), pattern![3].to(3)));
    assert_eq!(hit, None);
}

#[test]
fn test_wildcard_only_runs_effect() {
    let matched = Cell::new(0);
    matching((5,)).arms((pattern![_].run(|| matched.set(1)),));
    assert_eq!(matched.get(), 1);
}

#[test]
fn test_void_arms_before_value_arm() {
    let hit = matching((5,)).arms((
        pattern![10].run(|| {}),
        pattern![5].run(|| {}),
        pattern![3].run(|| {}),
        pattern![_].to(4),
    ));
    assert_eq!(hit, None);
}

#[test]
fn test_mixed_values_and_callables() {
    let hit = matching((5,)).arms((
        pattern![10].to(1),
        pattern![5].then(|| 2),
        pattern![3].to(3),
        pattern![_].to(4),
    ));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_effects_receive_subjects() {
    let seen = Cell::new(0);
    matching((5,)).arms((
        pattern![10].run_with(|_: &i32| seen.set(1)),
        pattern![5].run_with(|v: &i32| seen.set(*v * 10)),
        pattern![_].run(|| seen.set(4)),
    ));
    assert_eq!(seen.get(), 50);
}

#[test]
fn test_unsigned_results_widen() {
    let hit = matching((8,)).arms((
        pattern![1].to(1u8),
        pattern![2].to(2u16),
        pattern![3].to(3u32),
        pattern![8].to(8u64),
        pattern![_].to(11u64),
    ));
    assert_eq!(hit, Some(8u64));
}

#[test]
fn test_char_int_and_unsigned_results_unify() {
    let pick = |n: i32| {
        matching((n,)).arms((
            pattern![1].to('a'),
            pattern![2].to(2i32),
            pattern![3].to(u64::MAX),
        ))
    };
    assert_eq!(pick(3).unwrap_or(0), u64::MAX);
    assert_eq!(pick(2).unwrap_or(0), 2);
    assert_eq!(pick(1).unwrap_or(0), 97);
    assert_eq!(pick(4).unwrap_or(0), 0);
}

#[test]
fn test_value_is_moved_out_once() {
    struct Token(u32);

    let hit = matching(("789",)).arms((
        pattern!["123"].to(Token(1)),
        pattern!["456"].to(Token(2)),
        pattern!["789"].to(Token(3)),
    ));
    assert_eq!(hit.map(|t| t.0), Some(3));
}

#[test]
fn test_resolution_is_repeatable() {
    let session = matching((42, 1337));
    let first = session.arms((pattern![42, _x.gt(1000)].to("big"), pattern![_, _].to("other")));
    let second = session.arms((pattern![42, _x.gt(1000)].to("big"), pattern![_, _].to("other")));
    assert_eq!(first, second);
    assert_eq!(first, Some("big"));
}

// ============ Strings ============

#[test]
fn test_string_literal_subject() {
    let hit = matching(("12345",)).arms((
        pattern!["1"].to(1),
        pattern![String::from("2")].to(2),
        pattern!["12345"].to(3),
        pattern![_].to(4),
    ));
    assert_eq!(hit, Some(3));
}

#[test]
fn test_owned_string_subject() {
    let x = String::from("12345");
    let hit = matching((x,)).arms((
        pattern!["1"].to(1),
        pattern![String::from("2")].to(2),
        pattern!["12345"].to(3),
        pattern![_].to(4),
    ));
    assert_eq!(hit, Some(3));
}

#[test]
fn test_borrowed_string_subject() {
    let x = String::from("456");
    let hit = matching((&x,)).arms((pattern!["123"].to(1), pattern!["456"].to(2)));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_borrowed_integer_subject() {
    let n: i32 = 5;
    let session = matching((&n,));
    let hit = session.arms((
        pattern![_x.gt(10)].to(1),
        pattern![range(1, 4)].to(2),
        pattern![(_x % 2).eq(1).and(range(1, 9))].to(3),
        pattern![_].to(4),
    ));
    assert_eq!(hit, Some(3));

    let hit = session.arms((pattern![is::<i64>()].to(1), pattern![is::<i32>()].to(2)));
    assert_eq!(hit, Some(2));

    let hit = session.arms((pattern![val(4).lt(_x)].to(1), pattern![_].to(2)));
    assert_eq!(hit, Some(1));
}

// ============ Several subjects ============

#[test]
fn test_two_subjects() {
    let (x, y) = (42, 1337);
    let cases = [(42, 13370, 2), (42, 1337, 1), (420, 1337, 3), (420, 13370, 4)];

    for (a, b, expected) in cases {
        let hit = matching((x, y)).arms((
            pattern![a, b].with(|_: &i32, _: &i32| 1),
            pattern![a, _].with(|_: &i32, _: &i32| 2),
            pattern![_, b].then(|| 3),
            pattern![_, _].then(|| 4),
        ));
        assert_eq!(hit, Some(expected), "pattern ({a}, {b})");
    }
}

// ============ Pattern library ============

#[test]
fn test_range_is_inclusive() {
    let classify = |n: i32| matching((n,)).arms((pattern![range(1, 11)].to(1), pattern![_].to(2)));
    assert_eq!(classify(12), Some(2));
    assert_eq!(classify(11), Some(1));
    assert_eq!(classify(1), Some(1));

    let hit = matching((12,)).arms((pattern![range(1, 124)].to(1), pattern![_].to(2)));
    assert_eq!(hit, Some(1));
    let hit = matching((12,)).arms((pattern![range(13, 124)].to(1), pattern![_].to(2)));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_one_of() {
    let hit = matching((4,)).arms((
        pattern![one_of((1, 2, 3, 4, 5, 6, 7, 10, 12))].to(1),
        pattern![_].to(2),
    ));
    assert_eq!(hit, Some(1));

    let hit = matching((4,)).arms((
        pattern![one_of([1, 2, 3, 5, 6, 7, 10, 12])].to(1),
        pattern![_].to(2),
    ));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_not_one_of() {
    let hit = matching((4,)).arms((pattern![!one_of((1, 2, 3, 5))].to(1), pattern![_].to(2)));
    assert_eq!(hit, Some(1));

    let hit = matching((4,)).arms((pattern![!one_of((1, 2, 3, 4))].to(1), pattern![_].to(2)));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_optional_some_and_none() {
    let present = Some(42);
    let absent: Option<i32> = None;

    let describe = |o: Option<i32>| {
        matching((o,)).arms((
            pattern![some(11)].to("eleven"),
            pattern![some(42)].to("forty-two"),
            pattern![is_some()].to("something"),
            pattern![none()].to("nothing"),
        ))
    };
    assert_eq!(describe(present), Some("forty-two"));
    assert_eq!(describe(Some(7)), Some("something"));
    assert_eq!(describe(absent), Some("nothing"));
}

#[test]
fn test_pointer_payload_through_option() {
    let describe = |p: Option<Box<i32>>| {
        matching((p,)).arms((
            pattern![some(11)].to(1),
            pattern![some(42)].to(2),
            pattern![some(_x.gt(100))].to(3),
            pattern![none()].to(4),
            pattern![_].to(5),
        ))
    };
    assert_eq!(describe(Some(Box::new(42))), Some(2));
    assert_eq!(describe(Some(Box::new(1000))), Some(3));
    assert_eq!(describe(None), Some(4));
    assert_eq!(describe(Some(Box::new(7))), Some(5));
}

#[test]
fn test_shared_pointer_payload() {
    let shared = Some(std::rc::Rc::new('q'));
    let hit = matching((&shared,)).arms((pattern![some('p')].to(1), pattern![some('q')].to(2)));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_sizes_on_vector() {
    let x = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

    let hit = matching((&x,)).arms((
        pattern![sized(1)].to(1),
        pattern![sized(2)].to(2),
        pattern![sized(10)].to(4),
        pattern![_].to(5),
    ));
    assert_eq!(hit, Some(4));

    let hit = matching((&x,)).arms((
        pattern![size(_x).eq(1usize)].to(1),
        pattern![size(_x).eq(10usize)].to(4),
        pattern![_].to(5),
    ));
    assert_eq!(hit, Some(4));

    let hit = matching((&x,)).arms((pattern![ssized(-1)].to(1), pattern![ssized(10)].to(4)));
    assert_eq!(hit, Some(4));

    let hit = matching((&x,)).arms((
        pattern![ssize(_x).eq(-1isize)].to(1),
        pattern![ssize(_x).eq(10isize)].to(4),
    ));
    assert_eq!(hit, Some(4));
}

#[derive(Debug, Variants)]
enum Slot {
    Int(i32),
    Text(String),
}

#[test]
fn test_valued_on_tagged_union() {
    let x = Slot::Int(11223344);

    let hit = matching((&x,)).arms((
        pattern![valued(11223344)].to(1),
        pattern![valued(String::from("11223344"))].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(1));

    let hit = matching((&x,)).arms((
        pattern![valued(String::from("0"))].to(1),
        pattern![valued(0)].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(3));
}

#[test]
fn test_typed_on_tagged_union() {
    let x = Slot::Int(11223344);
    let y = Slot::Text("11223344".into());

    let kind = |c: &Slot| {
        matching((c,)).arms((
            pattern![typed::<i32>()].to(1),
            pattern![typed::<String>()].to(2),
            pattern![_].to(3),
        ))
    };
    assert_eq!(kind(&x), Some(1));
    assert_eq!(kind(&y), Some(2));
}

fn type_name_of<T>(value: T) -> &'static str {
    matching((value,))
        .arms((
            pattern![is::<i8>()].to("i8"),
            pattern![is::<i16>()].to("i16"),
            pattern![is::<i32>()].to("i32"),
            pattern![is::<i64>()].to("i64"),
            pattern![is::<str>()].to("str"),
            pattern![_].to("other"),
        ))
        .unwrap_or("invalid")
}

#[test]
fn test_is_on_generic_subjects() {
    assert_eq!(type_name_of(42i32), "i32");
    assert_eq!(type_name_of(7i16), "i16");
    assert_eq!(type_name_of("11223344"), "str");
    assert_eq!(type_name_of(String::from("11223344")), "other");
    assert_eq!(type_name_of(1.5f32), "other");
}

#[test]
fn test_predicates() {
    let x = 1337;
    let hits = [
        _x.eq(1337).apply(&x),
        val(1337).eq(_x).apply(&x),
        _x.ne(1).apply(&x),
        val(1).ne(_x).apply(&x),
        _x.gt(10).apply(&x),
        val(2000).gt(_x).apply(&x),
        _x.ge(1337).apply(&x),
        val(2000).ge(_x).apply(&x),
        _x.le(2337).apply(&x),
        val(1337).le(_x).apply(&x),
    ];
    assert_eq!(hits, [true; 10]);

    let hit = matching((x,)).arms((
        pattern![_x.lt(10).or(range(2000, 2100))].to(1),
        pattern![_].to(2),
    ));
    assert_eq!(hit, Some(2));
    let hit = matching((x,)).arms((
        pattern![_x.lt(2000).and(range(1000, 2100))].to(1),
        pattern![_].to(2),
    ));
    assert_eq!(hit, Some(1));
}

fn is_even<P>(inner: P) -> Predicate<impl Eval<i32, Value = bool>>
where
    P: Operand,
    P::Expr: Eval<i32, Value = i32>,
{
    Predicate::from_expr(inner.into_operand()).map(|n: &i32| n % 2 == 0)
}

#[test]
fn test_user_defined_predicate() {
    let hit = matching((1337,)).arms((
        pattern![is_even(_x)].to("even"),
        pattern![!is_even(_x)].to("odd"),
    ));
    assert_eq!(hit, Some("odd"));

    let hit = matching((1336,)).arms((pattern![(_x % 2).eq(0)].to(true),));
    assert_eq!(hit, Some(true));
}

#[test]
fn test_destructure_tuple() {
    let x = (1337, String::from("123"));

    let hit = matching((&x,)).arms((
        pattern![ds![1338, _]].to(1),
        pattern![ds![_x.le(1338), "1234"]].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(3));

    let hit = matching((&x,)).arms((
        pattern![ds![_, "1234"]].to(1),
        pattern![ds![_x.le(1338), "123"]].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));

    let hit = matching((&x,)).arms((
        pattern![ds![_x.lt(1337)]].to(1),
        pattern![ds![_x.gt(1337)]].to(2),
        pattern![ds![_x.ne(1337)]].to(3),
        pattern![ds![_x.eq(1337)]].to(4),
        pattern![_].to(5),
    ));
    assert_eq!(hit, Some(4));
}

#[derive(Debug, Destructure)]
struct Aggregate {
    x: i32,
    y: f32,
    z: char,
}

#[test]
fn test_destructure_struct() {
    let x = Aggregate { x: 1337, y: 42.0, z: 'b' };

    let hit = matching((&x,)).arms((
        pattern![ds![1338, _, 'a']].to(1),
        pattern![ds![_x.le(1338), _y.ge(0.0f32), one_of(('a', 'b'))]].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));

    let hit = matching((&x,)).arms((
        pattern![ds![_x.lt(1337)]].to(1),
        pattern![ds![_x.gt(1337)]].to(2),
        pattern![ds![_x.eq(1337), __, _z.ne('a')]].to(4),
        pattern![_].to(5),
    ));
    assert_eq!(hit, Some(4));
}

#[test]
fn test_positions() {
    let x = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
    let y = vec![1, 2];

    let hit = matching((&x,)).arms((
        pattern![find(10).ne(end())].to(1),
        pattern![find(0).ne(end())].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));

    let square = |n: &i32| n * n;
    let hit = matching((&x,)).arms((
        pattern![find_by(10, square).ne(end())].to(1),
        pattern![find_by(4, square).ne(end())].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));

    let hit = matching((&y,)).arms((
        pattern![next(begin(), 2).eq(prev(end(), 2))].to(1),
        pattern![next(begin(), 1).eq(prev(end(), 1))].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_regex_full_match() {
    let hit = matching(("12345689_abcdefgh",)).arms((
        pattern![regex("zzz")].to(1),
        pattern![regex("[0-9]+_.*")].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));

    let hit = matching(("12345689_abcdefgh",)).arms((
        pattern![sregex("[0-9]+")].to(1),
        pattern![sregex("[0-9]+_[a-h]+")].to(2),
        pattern![_].to(3),
    ));
    assert_eq!(hit, Some(2));
}

#[test]
fn test_three_subjects_mixed_terms() {
    let hit = matching((3, "abc", Some(2.5))).arms((
        pattern![_x.gt(3), _, _].to(1),
        pattern![_, regex("a.c"), none()].to(2),
        pattern![one_of((1, 3)), "abc", some(_z.lt(3.0))].to(3),
        pattern![_, _, _].to(4),
    ));
    assert_eq!(hit, Some(3));
}
