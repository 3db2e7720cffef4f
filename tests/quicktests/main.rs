
use quickcheck::{Arbitrary, Gen};

/// Degenerate trees need `2^depth` slots so generated inputs are cut off at this length.
pub const MAX_LEN: usize = 16;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<V> {
    /// Insert the value into the data structure
    Insert(V),
    /// Remove one occurrence of the value from the data structure
    Remove(V),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(V::arbitrary(g)),
            1 => Op::Remove(V::arbitrary(g)),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(v) => Box::new(v.shrink().map(Op::Insert)),
            Op::Remove(v) => Box::new(v.shrink().map(Op::Remove)),
        }
    }
}

#[test]
fn op_shrinks_its_value() {
    let shrunk = Op::Insert(4i8).shrink().collect::<Vec<_>>();
    assert!(!shrunk.is_empty());
    assert!(shrunk
        .iter()
        .all(|op| matches!(op, Op::Insert(x) if x.abs() < 4)));

    let shrunk = Op::Remove(-4i8).shrink().collect::<Vec<_>>();
    assert!(!shrunk.is_empty());
    assert!(shrunk
        .iter()
        .all(|op| matches!(op, Op::Remove(x) if x.abs() < 4)));
}
