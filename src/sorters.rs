//! One unit struct per algorithm, all behind the [`Sorter`] trait so callers
//! can swap strategies without touching call sites.

use crate::bitonic::bitonic_sort;
use crate::error::Result;
use crate::heap::heap_sort;
use crate::merge::{adaptive_merge_sort, merge_sort};
use crate::quadratic::{
    bogo_sort, bubble_sort, cocktail_shaker_sort, gnome_sort, insertion_sort, selection_sort,
    shell_sort,
};
use crate::quick::{intro_sort, quick_sort};
use crate::radix::{radix_sort_lsd, radix_sort_msd, RadixKey};
use crate::Sorter;

macro_rules! sorter {
    (
        $(#[$attr:meta])*
        $name:ident, $label:literal, stable = $stable:literal,
        where T: $($bound:path),+ ;
        |$data:ident| $body:expr
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T> Sorter<T> for $name
        where
            $(T: $bound,)+
        {
            fn name(&self) -> &'static str {
                $label
            }

            fn is_stable(&self) -> bool {
                $stable
            }

            fn sort(&self, $data: &mut [T]) -> Result<()> {
                $body
            }
        }
    };
}

sorter! {
    /// Shuffle until sorted. Only for tiny inputs.
    BogoSort, "bogo_sort", stable = false, where T: Ord;
    |data| {
        bogo_sort(data);
        Ok(())
    }
}

sorter! {
    BubbleSort, "bubble_sort", stable = true, where T: Ord;
    |data| {
        bubble_sort(data);
        Ok(())
    }
}

sorter! {
    SelectionSort, "selection_sort", stable = false, where T: Ord;
    |data| {
        selection_sort(data);
        Ok(())
    }
}

sorter! {
    InsertionSort, "insertion_sort", stable = true, where T: Ord;
    |data| {
        insertion_sort(data);
        Ok(())
    }
}

sorter! {
    GnomeSort, "gnome_sort", stable = true, where T: Ord;
    |data| {
        gnome_sort(data);
        Ok(())
    }
}

sorter! {
    CocktailShakerSort, "cocktail_shaker_sort", stable = true, where T: Ord;
    |data| {
        cocktail_shaker_sort(data);
        Ok(())
    }
}

sorter! {
    ShellSort, "shell_sort", stable = false, where T: Ord;
    |data| {
        shell_sort(data);
        Ok(())
    }
}

sorter! {
    /// Heap sort - O(n log n) worst case, in-place
    HeapSort, "heap_sort", stable = false, where T: Ord;
    |data| {
        heap_sort(data);
        Ok(())
    }
}

sorter! {
    MergeSort, "merge_sort", stable = true, where T: Ord, Clone;
    |data| {
        merge_sort(data);
        Ok(())
    }
}

sorter! {
    /// Lomuto quick sort, last element as pivot.
    QuickSort, "quick_sort", stable = false, where T: Ord;
    |data| {
        quick_sort(data);
        Ok(())
    }
}

sorter! {
    /// Natural merge sort over detected runs.
    AdaptiveMergeSort, "adaptive_merge_sort", stable = true, where T: Ord, Clone;
    |data| {
        adaptive_merge_sort(data);
        Ok(())
    }
}

sorter! {
    IntroSort, "intro_sort", stable = false, where T: Ord;
    |data| {
        intro_sort(data);
        Ok(())
    }
}

sorter! {
    /// Fails on lengths that are not a power of two.
    BitonicSort, "bitonic_sort", stable = false, where T: Ord;
    |data| bitonic_sort(data)
}

sorter! {
    /// Fails on negative values.
    RadixSortLsd, "radix_sort_lsd", stable = true, where T: RadixKey;
    |data| radix_sort_lsd(data)
}

sorter! {
    RadixSortMsd, "radix_sort_msd", stable = false, where T: RadixKey;
    |data| {
        radix_sort_msd(data);
        Ok(())
    }
}
