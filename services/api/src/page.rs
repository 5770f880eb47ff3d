use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>전역일 카운터 생성</title>
  <style>
    body { min-height: 100vh; margin: 0; display: flex; align-items: center; justify-content: center; background: #111827; color: #e5e7eb; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Pretendard', Roboto, sans-serif; }
    main { background: #1f2937; padding: 2rem; border-radius: 0.75rem; width: 100%; max-width: 28rem; }
    h1 { text-align: center; color: #fff; }
    label { display: block; margin: 1rem 0 0.5rem; color: #9ca3af; font-size: 0.875rem; }
    input, select { width: 100%; box-sizing: border-box; padding: 0.5rem 0.75rem; background: #374151; border: 1px solid #4b5563; border-radius: 0.375rem; color: #fff; }
    button { width: 100%; margin-top: 1.5rem; padding: 0.75rem; background: #4f46e5; color: #fff; font-weight: 700; border: 0; border-radius: 0.375rem; cursor: pointer; }
    p { margin-top: 2rem; text-align: center; color: #6b7280; font-size: 0.875rem; }
  </style>
</head>
<body>
  <main>
    <h1>전역일 카운터 생성</h1>
    <form method="get" action="/view">
      <label for="startdate">입대일</label>
      <input type="date" id="startdate" name="startdate" required>
      <label for="enddate">전역일</label>
      <input type="date" id="enddate" name="enddate">
      <label for="branch">군종 (전역일 미입력 시)</label>
      <select id="branch" name="branch">
        <option value="">선택 안 함</option>
        <option value="army">육군</option>
        <option value="marines">해병대</option>
        <option value="navy">해군</option>
        <option value="airforce">공군</option>
      </select>
      <button type="submit">생성하기</button>
    </form>
    <p>생성된 URL을 GitHub README 등에 이미지로 삽입하여 사용할 수 있습니다.</p>
  </main>
</body>
</html>
"#;

pub(crate) async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
