//! Index-wise grouping of several sequences

use crate::reduction::reduce;
use crate::transformation::map;

/// Group the elements of every sequence by index.
///
/// The output is as long as the longest input; shorter inputs contribute
/// `None` past their end.
///
/// ```
/// use underbar_collections::zip;
///
/// let zipped = zip(&[vec!["a", "b", "c"], vec!["1", "2"]]);
/// assert_eq!(zipped.len(), 3);
/// assert_eq!(zipped[2], vec![Some("c"), None]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = reduce(sequences, |max, sequence| max.max(sequence.as_ref().len()), 0usize);
    (0..longest)
        .map(|index| map(sequences, |sequence, _, _| sequence.as_ref().get(index).cloned()))
        .collect()
}
