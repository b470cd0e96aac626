//! End-to-end coverage: extraction through fragment rendering to the
//! serialized response.

use limit_offset::{extract_params, paginate, PageParams, PageResponse, Sort};
use serde_json::json;

#[test]
fn first_page_of_six_items() {
    let params = extract_params("/sample?page[limit]=5&page[offset]=0", 0, 10).unwrap();
    assert_eq!(params.sql_fragment(), " LIMIT 6 OFFSET 0 ");

    let items = vec!["a", "b", "c", "d", "e", "f"];
    let page = paginate(items, "/sample", &params);

    assert_eq!(page.data, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(page.links.first, "/sample?page[limit]=5&page[offset]=0");
    assert_eq!(
        page.links.next.as_deref(),
        Some("/sample?page[limit]=5&page[offset]=5"),
    );
    assert!(page.links.prev.is_none());
    assert!(page.links.last.is_none());
}

#[test]
fn sorted_request_round_trips_into_links() {
    let params = extract_params(
        "https://app.example.com/api/users?page[limit]=2&page[offset]=4&sort=last_name.asc,created_at.desc",
        0,
        10,
    )
    .unwrap();
    assert_eq!(
        params.sql_fragment(),
        " LIMIT 3 OFFSET 4 ORDER BY last_name asc,created_at desc",
    );

    let page = paginate(vec![1, 2, 3], "/api/users", &params);
    assert_eq!(page.data, vec![1, 2]);

    let next = page.links.next.expect("sentinel row implies a next page");
    assert_eq!(
        next,
        "/api/users?page[limit]=2&page[offset]=6&sort=last_name.asc,created_at.desc",
    );

    // A client following the link gets the same sort order back.
    let followed = extract_params(&next, 0, 10).unwrap();
    assert_eq!(followed.sort, params.sort);
    assert_eq!(followed.offset, 6);
}

#[test]
fn serialized_response_omits_absent_links() {
    let params = PageParams {
        limit: 2,
        offset: 0,
        sort: vec![Sort {
            field: "name".to_string(),
            order: "asc".to_string(),
        }],
    };
    let page = paginate(vec!["x", "y"], "/things", &params);

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "data": ["x", "y"],
            "links": {
                "first": "/things?page[limit]=2&page[offset]=0&sort=name.asc",
            },
        }),
    );
}

#[test]
fn serialized_response_round_trips() {
    let params = PageParams {
        limit: 1,
        offset: 1,
        sort: vec![],
    };
    let page = paginate(vec!["a", "b"], "/things", &params);

    let encoded = serde_json::to_string(&page).unwrap();
    let decoded: PageResponse<String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.data, vec!["a"]);
    assert_eq!(decoded.links, page.links);
}

#[test]
fn parse_failure_still_offers_usable_defaults() {
    let err = extract_params("/sample?page[limit]=lots", 0, 25).unwrap_err();
    let params = err.into_params();

    // Proceeding with the defaults is the caller's call; the pipeline
    // stays coherent if it does.
    assert_eq!(params.sql_fragment(), " LIMIT 26 OFFSET 0 ");
    let page = paginate(vec![0_u8; 10], "/sample", &params);
    assert_eq!(page.data.len(), 10);
    assert!(page.links.next.is_none());
}
