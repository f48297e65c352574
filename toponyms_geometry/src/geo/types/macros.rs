/// Implements construction of a composite geometry from a list of its parts,
/// e.g. a ring from `&[[0, 0], [1, 0], [1, 1], [0, 0]]`.
#[macro_export]
macro_rules! impl_from_parts {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}
	)*}
}
