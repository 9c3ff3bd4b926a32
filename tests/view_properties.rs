use proptest::prelude::*;
use serde_json::json;

use radar_inteligente::domain::filter::{FilterCriteria, apply};
use radar_inteligente::domain::notice::ProcurementNotice;
use radar_inteligente::domain::types::{PageSize, RegionCode};
use radar_inteligente::models::notice::{RawNotice, normalize};
use radar_inteligente::pagination::{Paginated, WINDOW_MAX, page_window};
use radar_inteligente::view::{NoticeListView, ViewInputs};

const OBJECTS: [&str; 4] = ["Livros escolares", "Cadeiras", "Merenda", "Livros técnicos"];
const MODALITIES: [&str; 3] = ["Pregão Eletrônico", "Concorrência", "Dispensa"];
const REGIONS: [&str; 3] = ["SP", "RJ", "MG"];

fn raw_notice(
    id: i64,
    object: usize,
    modality: usize,
    region: usize,
    day: Option<u32>,
) -> RawNotice {
    let mut value = json!({
        "id": id,
        "objeto": OBJECTS[object],
        "modalidade": MODALITIES[modality],
        "uf": REGIONS[region],
    });
    if let Some(day) = day {
        value["data_publicacao"] = json!(format!("2024-01-{day:02}T12:00:00"));
    }
    RawNotice(value)
}

fn raw_notices() -> impl Strategy<Value = Vec<RawNotice>> {
    prop::collection::vec((0..4usize, 0..3usize, 0..3usize, prop::option::of(1..=28u32)), 0..60)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(idx, (object, modality, region, day))| {
                    raw_notice(idx as i64 + 1, object, modality, region, day)
                })
                .collect()
        })
}

fn notices() -> impl Strategy<Value = Vec<ProcurementNotice>> {
    raw_notices().prop_map(|raw| raw.into_iter().filter_map(|r| normalize(r).ok()).collect())
}

fn page_size() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PageSize::OPTIONS.to_vec()).prop_map(|size| PageSize::new(size).unwrap())
}

fn ids(notices: &[ProcurementNotice]) -> Vec<i64> {
    notices.iter().map(|n| n.id.get()).collect()
}

proptest! {
    #[test]
    fn pages_partition_the_sequence(len in 0usize..250, size in page_size()) {
        let items: Vec<usize> = (0..len).collect();
        let first = Paginated::from_slice(&items, size, 1);

        prop_assert_eq!(first.total_pages, len.div_ceil(size.get()).max(1));

        let mut joined = Vec::new();
        for page in 1..=first.total_pages {
            joined.extend(Paginated::from_slice(&items, size, page as i64).items);
        }
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn any_requested_page_is_clamped(
        len in 0usize..250,
        size in page_size(),
        requested in any::<i64>()
    ) {
        let items: Vec<usize> = (0..len).collect();
        let page = Paginated::from_slice(&items, size, requested);

        prop_assert!(page.page >= 1);
        prop_assert!(page.page <= page.total_pages);
        prop_assert!(page.items.len() <= size.get());
    }

    #[test]
    fn window_is_bounded_and_anchored(total in 1usize..500, current_seed in any::<usize>()) {
        let current = current_seed % total + 1;
        let window = page_window(total, current);
        let numbers: Vec<usize> = window.iter().flatten().copied().collect();

        prop_assert!(numbers.len() <= WINDOW_MAX);
        prop_assert_eq!(numbers.first().copied(), Some(1));
        prop_assert_eq!(numbers.last().copied(), Some(total));
        prop_assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn stricter_criteria_never_grow_the_result(
        records in notices(),
        object in 0..4usize,
        region in 0..3usize,
    ) {
        let query = OBJECTS[object].split_whitespace().next().unwrap_or_default();
        let loose = FilterCriteria::new().text(query);
        let strict = loose.clone().region(RegionCode::new(REGIONS[region]).unwrap());

        let loose_ids = ids(&apply(&loose, &records));
        let strict_ids = ids(&apply(&strict, &records));

        prop_assert!(strict_ids.len() <= loose_ids.len());
        prop_assert!(strict_ids.iter().all(|id| loose_ids.contains(id)));
    }

    #[test]
    fn derivation_is_idempotent(records in raw_notices(), page in -5i64..10, size in page_size()) {
        let mut view = NoticeListView::new();
        view.begin_refresh();
        view.finish_refresh(Ok(records)).unwrap();

        let inputs = ViewInputs {
            criteria: FilterCriteria::new().text("livros"),
            page,
            page_size: size,
            ..Default::default()
        };

        let first = view.derive(&inputs).unwrap();
        let second = view.derive(&inputs).unwrap();

        prop_assert_eq!(ids(&first.page.items), ids(&second.page.items));
        prop_assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn derived_pages_are_sorted_newest_first(records in raw_notices()) {
        let mut view = NoticeListView::new();
        view.begin_refresh();
        view.finish_refresh(Ok(records)).unwrap();

        let inputs = ViewInputs {
            page: 1,
            page_size: PageSize::new(50).unwrap(),
            ..Default::default()
        };
        let derived = view.derive(&inputs).unwrap();
        let keys: Vec<_> = derived
            .page
            .items
            .iter()
            .map(ProcurementNotice::publication_sort_key)
            .collect();

        prop_assert!(keys.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
