use maud::{html, Markup, PreEscaped};

/// File input + client-side preview. The picked file is read into a data
/// URL (the same preview the browser shows) and submitted through the
/// hidden field; the server decodes and size-checks it again.
pub fn image_picker(hidden_name: &str, label: &str) -> Markup {
    let input_id = format!("{hidden_name}_file");
    let preview_id = format!("{hidden_name}_preview");
    let note_id = format!("{hidden_name}_note");

    let script = format!(
        r#"
document.getElementById('{input_id}').addEventListener('change', function () {{
  var file = this.files[0];
  var note = document.getElementById('{note_id}');
  note.textContent = '';
  if (!file) return;
  if (file.size > 1048576) {{
    note.textContent = 'Image must not exceed 1MB';
    this.value = '';
    return;
  }}
  var reader = new FileReader();
  reader.onload = function (e) {{
    document.querySelector('input[name="{hidden_name}"]').value = e.target.result;
    var img = document.getElementById('{preview_id}');
    img.src = e.target.result;
    img.style.display = 'block';
  }};
  reader.readAsDataURL(file);
}});
"#
    );

    html! {
        div class="image-picker" {
            label for=(input_id) { (label) }
            input id=(input_id) type="file" accept="image/*";
            input type="hidden" name=(hidden_name) value="";
            img id=(preview_id) class="image-preview" style="display:none" alt="preview";
            p id=(note_id) class="field-error" {}
            script { (PreEscaped(script)) }
        }
    }
}
