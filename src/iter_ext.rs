use std::iter::FusedIterator;

/// Skips items equal to the one just yielded, like `uniq(1)`.
#[derive(Debug, Clone)]
pub struct UniqueIterator<I: Iterator> {
    last: Option<I::Item>,
    iter: I,
}

impl<I: Iterator> Iterator for UniqueIterator<I>
where
    I::Item: Clone + PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.last {
            None => self.iter.next(),
            Some(last) => self.iter.find(|item| item != last),
        };

        self.last = next.clone();
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.iter.size_hint();

        if self.last.is_none() && min > 0 {
            (1, max)
        } else {
            (0, max)
        }
    }
}

impl<I: FusedIterator> FusedIterator for UniqueIterator<I> where I::Item: Clone + PartialEq {}

pub trait BetterIterator: Iterator + Sized {
    fn unique(self) -> UniqueIterator<Self> {
        UniqueIterator {
            iter: self,
            last: None,
        }
    }

    /// The `n` largest items, largest first.
    fn top_n(self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut best: Vec<Self::Item> = Vec::with_capacity(n + 1);

        for item in self {
            let index = best.iter().position(|kept| *kept < item).unwrap_or(best.len());
            if index < n {
                best.insert(index, item);
                best.truncate(n);
            }
        }

        best
    }
}

impl<I: Iterator> BetterIterator for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_drops_consecutive_repeats() {
        let items: Vec<i32> = vec![1, 1, 2, 2, 2, 3, 1].into_iter().unique().collect();
        assert_eq!(items, [1, 2, 3, 1]);
    }

    #[test]
    fn top_n_keeps_largest() {
        let top = vec![6000, 4000, 11000, 24000, 10000].into_iter().top_n(3);
        assert_eq!(top, [24000, 11000, 10000]);
    }

    #[test]
    fn top_n_with_few_items() {
        assert_eq!(vec![2, 5].into_iter().top_n(3), [5, 2]);
    }
}
